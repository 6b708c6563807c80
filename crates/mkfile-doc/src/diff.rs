//! Line diffs between original and regenerated Makefile text

use similar::{ChangeTag, TextDiff};

/// Line-level comparison of two Makefile texts
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDiff {
    /// Are the texts identical?
    pub is_equivalent: bool,
    /// Added and removed lines, in diff order
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f32,
}

/// A single changed line (without its trailing newline)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Added { line: String },
    Removed { line: String },
}

impl RenderDiff {
    /// Create a diff indicating the texts are identical
    pub fn equivalent() -> Self {
        Self {
            is_equivalent: true,
            changes: Vec::new(),
            similarity: 1.0,
        }
    }

    /// Compute a line-by-line diff with the `similar` crate.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::equivalent();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = text_diff.ratio();

        let changes: Vec<LineChange> = text_diff
            .iter_all_changes()
            .filter_map(|change| {
                let line = change.value().trim_end_matches(['\n', '\r']).to_string();
                match change.tag() {
                    ChangeTag::Delete => Some(LineChange::Removed { line }),
                    ChangeTag::Insert => Some(LineChange::Added { line }),
                    ChangeTag::Equal => None,
                }
            })
            .collect();

        Self {
            is_equivalent: changes.is_empty(),
            changes,
            similarity,
        }
    }

    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().filter_map(|change| match change {
            LineChange::Added { line } => Some(line.as_str()),
            LineChange::Removed { .. } => None,
        })
    }

    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().filter_map(|change| match change {
            LineChange::Removed { line } => Some(line.as_str()),
            LineChange::Added { .. } => None,
        })
    }
}

impl Default for RenderDiff {
    fn default() -> Self {
        Self::equivalent()
    }
}

/// Unified diff text from `old` to `new`, empty when they are identical.
pub fn unified_diff(old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header("a/Makefile", "b/Makefile")
        .to_string()
}
