//! Filesystem collaborator for mkfile documents
//!
//! `mkfile-doc` never touches the filesystem. This crate reads Makefile
//! text, hands it to [`Document::parse`](mkfile_doc::Document::parse), and
//! writes regenerated text back atomically.

pub mod editor;
pub mod error;
pub mod io;

pub use editor::MakefileEditor;
pub use error::{Error, Result};
