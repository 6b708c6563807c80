//! Shared test utilities for the mkfile workspace.
//!
//! Dev-dependency only. Banner text here is written out by hand rather than
//! produced by `mkfile-doc`, so tests compare against an independent
//! rendition of the format.
//!
//! # Modules
//!
//! - [`makefile`] — banner text and a [`MakefileBuilder`] for Makefile sources
//! - [`dir`] — [`TestDir`] temporary directory holding Makefiles

pub mod dir;
pub mod makefile;

pub use dir::TestDir;
pub use makefile::{MakefileBuilder, SAMPLE_MAKEFILE, banner};
