//! Edit types for paragraph-level modification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a paragraph: section index, then index within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParagraphLocation {
    pub section: usize,
    pub paragraph: usize,
}

impl ParagraphLocation {
    pub fn new(section: usize, paragraph: usize) -> Self {
        Self { section, paragraph }
    }
}

impl fmt::Display for ParagraphLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section {}, paragraph {}", self.section, self.paragraph)
    }
}

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// A paragraph was inserted.
    Insert,
    /// A paragraph's contents were replaced.
    Replace,
    /// A paragraph was removed.
    Remove,
}

/// A recorded paragraph edit.
///
/// `old_content` is empty for inserts and `new_content` is empty for
/// removals. Applying [`Edit::inverse`] after the edit restores the
/// previous document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub kind: EditKind,
    pub location: ParagraphLocation,
    pub old_content: String,
    pub new_content: String,
}

impl Edit {
    pub fn insert(location: ParagraphLocation, new_content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            location,
            old_content: String::new(),
            new_content: new_content.into(),
        }
    }

    pub fn replace(
        location: ParagraphLocation,
        old_content: impl Into<String>,
        new_content: impl Into<String>,
    ) -> Self {
        Self {
            kind: EditKind::Replace,
            location,
            old_content: old_content.into(),
            new_content: new_content.into(),
        }
    }

    pub fn remove(location: ParagraphLocation, old_content: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Remove,
            location,
            old_content: old_content.into(),
            new_content: String::new(),
        }
    }

    /// The edit that undoes this one.
    pub fn inverse(&self) -> Self {
        match self.kind {
            EditKind::Insert => Self::remove(self.location, self.new_content.clone()),
            EditKind::Replace => Self::replace(
                self.location,
                self.new_content.clone(),
                self.old_content.clone(),
            ),
            EditKind::Remove => Self::insert(self.location, self.old_content.clone()),
        }
    }
}
