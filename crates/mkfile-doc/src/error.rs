//! Error types for mkfile-doc

use crate::edit::ParagraphLocation;

/// Result type for mkfile-doc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by document edits.
///
/// Parsing, lookups and rendering are total and never produce these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Section index {index} out of range ({len} sections)")]
    SectionOutOfRange { index: usize, len: usize },

    #[error("Paragraph index {paragraph} out of range in section {section} ({len} paragraphs)")]
    ParagraphOutOfRange {
        section: usize,
        paragraph: usize,
        len: usize,
    },

    #[error("Invalid section name {name:?}: {reason}")]
    InvalidSectionName { name: String, reason: String },

    #[error("Paragraph contents are empty")]
    EmptyParagraph,

    #[error("Paragraph contents contain a blank line at line {line}")]
    BlankLineInParagraph { line: usize },

    #[error("Paragraph contents form a section banner")]
    BannerInParagraph,

    #[error("No assignment to {name} found")]
    AssignNotFound { name: String },

    #[error("Edit does not match document at {location}: expected {expected:?}, found {actual:?}")]
    EditMismatch {
        location: ParagraphLocation,
        expected: String,
        actual: String,
    },
}

impl Error {
    pub fn invalid_section_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSectionName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
