//! Section and paragraph model for banner-sectioned Makefiles.
//!
//! A [`Document`] splits Makefile text into paragraphs (maximal runs of
//! non-blank lines) and groups them into [`Section`]s delimited by 80-column
//! `#` banners:
//!
//! ```text
//! ################################################################################
//! #                                                                              #
//! #                                BUILD TARGETS                                 #
//! #                                                                              #
//! ################################################################################
//! ```
//!
//! Callers locate assignments and targets with [`Document::find_assigns`] and
//! [`Document::find_targets`], rewrite paragraphs through the index-qualified
//! edit operations, and regenerate text with [`Document::render`]. Nothing is
//! evaluated: variable references and recipes are opaque text.

pub mod banner;
pub mod diff;
pub mod document;
pub mod edit;
pub mod error;
mod lines;
pub mod paragraph;
pub mod section;

pub use diff::{LineChange, RenderDiff};
pub use document::Document;
pub use edit::{Edit, EditKind, ParagraphLocation};
pub use error::{Error, Result};
pub use paragraph::Paragraph;
pub use section::Section;
