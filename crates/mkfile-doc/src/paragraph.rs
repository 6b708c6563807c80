//! Paragraphs: maximal runs of non-blank lines.

use std::fmt;

use serde::Serialize;

use crate::banner;
use crate::error::{Error, Result};
use crate::lines;

/// Backslash immediately followed by a newline.
const CONTINUATION: &str = "\\\n";

/// A contiguous run of non-blank Makefile lines.
///
/// Contents never hold a blank line; lines are separated by `\n` with no
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    contents: String,
}

impl Paragraph {
    /// Create a paragraph from caller-supplied text.
    ///
    /// Any line break (`\r\n`, a lone `\r`, ...) is stored as `\n`.
    ///
    /// # Errors
    ///
    /// - `EmptyParagraph` for empty contents
    /// - `BlankLineInParagraph` if any line is whitespace-only (including a
    ///   trailing newline, which would leave an empty last line)
    /// - `BannerInParagraph` if the contents are a banner header, which would
    ///   re-parse as a section boundary
    pub fn new(contents: impl Into<String>) -> Result<Self> {
        let contents = lines::normalize_line_breaks(&contents.into());
        if contents.is_empty() {
            return Err(Error::EmptyParagraph);
        }
        if let Some(index) = contents.split('\n').position(|line| line.trim().is_empty()) {
            return Err(Error::BlankLineInParagraph { line: index + 1 });
        }
        if banner::parse_banner(&contents).is_some() {
            return Err(Error::BannerInParagraph);
        }
        Ok(Self { contents })
    }

    /// Wrap lines the parser already split on blank lines.
    pub(crate) fn from_parsed(contents: String) -> Self {
        Self { contents }
    }

    /// Raw contents, exactly as they will be rendered.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn into_contents(self) -> String {
        self.contents
    }

    /// Physical lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        lines::split_lines(&self.contents).into_iter()
    }

    /// Contents broken into logical lines.
    ///
    /// Every backslash-newline is removed before splitting, so a line ending
    /// in a continuation is joined to the next one with nothing inserted.
    pub fn logical_lines(&self) -> Vec<String> {
        let joined = self.contents.replace(CONTINUATION, "");
        lines::split_lines(&joined)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// True if any logical line assigns `name`.
    ///
    /// A line assigns `name` when its text before the first `=`, trimmed,
    /// is exactly `name`. The paragraph may hold other statements too.
    pub fn assigns(&self, name: &str) -> bool {
        self.logical_lines()
            .iter()
            .any(|line| is_assign_line(line, name))
    }

    /// True if any logical line defines target `name`.
    ///
    /// The first whitespace-delimited token must be `name:` exactly, so
    /// `name : deps` with a space before the colon does not count.
    pub fn defines_target(&self, name: &str) -> bool {
        self.logical_lines()
            .iter()
            .any(|line| is_target_line(line, name))
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}

pub(crate) fn is_assign_line(line: &str, name: &str) -> bool {
    let lhs = line.split_once('=').map_or(line, |(lhs, _)| lhs);
    lhs.trim() == name
}

pub(crate) fn is_target_line(line: &str, name: &str) -> bool {
    line.split_whitespace()
        .next()
        .and_then(|token| token.strip_suffix(':'))
        .is_some_and(|target| target == name)
}

/// Rewrite the first logical line assigning `name` to `replacement`.
///
/// Continuation lines belonging to that assignment are dropped; every other
/// physical line is kept verbatim. Returns `None` if nothing assigns `name`.
pub(crate) fn rewrite_assign(contents: &str, name: &str, replacement: &str) -> Option<String> {
    // Physical lines grouped into the logical lines they form.
    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in contents.split('\n') {
        current.push(line);
        if !line.ends_with('\\') {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut replaced = false;
    let output: Vec<String> = groups
        .into_iter()
        .map(|group| {
            let physical = group.join("\n");
            if !replaced && is_assign_line(&physical.replace(CONTINUATION, ""), name) {
                replaced = true;
                replacement.to_string()
            } else {
                physical
            }
        })
        .collect();

    replaced.then(|| output.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_lines_without_continuations() {
        let paragraph = Paragraph::new("FOO = 1\nBAR = 2").unwrap();
        assert_eq!(paragraph.logical_lines(), vec!["FOO = 1", "BAR = 2"]);
    }

    #[test]
    fn test_logical_lines_join_continuations() {
        let paragraph = Paragraph::new("A = 1 \\\nB = 2").unwrap();
        assert_eq!(paragraph.logical_lines(), vec!["A = 1 B = 2"]);
    }

    #[test]
    fn test_logical_lines_multiple_continuations() {
        let paragraph = Paragraph::new("SOURCES = a.c\\\n  b.c\\\n  c.c\nall: build").unwrap();
        assert_eq!(
            paragraph.logical_lines(),
            vec!["SOURCES = a.c  b.c  c.c", "all: build"]
        );
    }

    #[test]
    fn test_new_normalizes_carriage_returns() {
        let paragraph = Paragraph::new("A = 1\rB = 2\r\nall: a").unwrap();
        assert_eq!(paragraph.contents(), "A = 1\nB = 2\nall: a");
        assert!(paragraph.assigns("B"));
        assert!(paragraph.defines_target("all"));
    }

    #[test]
    fn test_new_rejects_blank_line_between_carriage_returns() {
        let err = Paragraph::new("a\r\rb").unwrap_err();
        assert!(matches!(err, Error::BlankLineInParagraph { line: 2 }));
    }

    #[test]
    fn test_logical_lines_split_on_unicode_line_separator() {
        let paragraph = Paragraph::from_parsed("A = 1\u{2028}B = 2".to_string());
        assert_eq!(paragraph.logical_lines(), vec!["A = 1", "B = 2"]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Paragraph::new(""), Err(Error::EmptyParagraph)));
    }

    #[test]
    fn test_new_rejects_blank_line() {
        let err = Paragraph::new("a\n   \nb").unwrap_err();
        assert!(matches!(err, Error::BlankLineInParagraph { line: 2 }));
    }

    #[test]
    fn test_new_rejects_trailing_newline() {
        let err = Paragraph::new("a\n").unwrap_err();
        assert!(matches!(err, Error::BlankLineInParagraph { line: 2 }));
    }

    #[test]
    fn test_new_rejects_banner() {
        let header = banner::render_banner("Tools");
        let header = header.trim_end_matches('\n');
        assert!(matches!(Paragraph::new(header), Err(Error::BannerInParagraph)));
    }

    #[test]
    fn test_assigns_checks_text_before_first_equals() {
        let paragraph = Paragraph::new("CFLAGS := -O2 -DX=1").unwrap();
        // `:=` leaves the colon on the left-hand side
        assert!(paragraph.assigns("CFLAGS :"));
        assert!(!paragraph.assigns("CFLAGS"));
    }

    #[test]
    fn test_target_requires_fused_colon() {
        assert!(Paragraph::new("build: dep").unwrap().defines_target("build"));
        assert!(!Paragraph::new("build : dep").unwrap().defines_target("build"));
        assert!(!Paragraph::new("build:dep").unwrap().defines_target("build"));
    }

    #[test]
    fn test_rewrite_assign_drops_continuations() {
        let contents = "# sources\nSRC = a.c \\\n  b.c\nOTHER = 1";
        let rewritten = rewrite_assign(contents, "SRC", "SRC = z.c").unwrap();
        assert_eq!(rewritten, "# sources\nSRC = z.c\nOTHER = 1");
    }

    #[test]
    fn test_rewrite_assign_only_first_occurrence() {
        let contents = "X = 1\nX = 2";
        assert_eq!(rewrite_assign(contents, "X", "X = 9").unwrap(), "X = 9\nX = 2");
    }

    #[test]
    fn test_rewrite_assign_missing() {
        assert_eq!(rewrite_assign("Y = 1", "X", "X = 2"), None);
    }
}
