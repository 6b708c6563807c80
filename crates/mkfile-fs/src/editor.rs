//! Load, edit and save a Makefile on disk.

use std::path::{Path, PathBuf};

use mkfile_doc::Document;

use crate::Result;
use crate::io;

/// A parsed Makefile bound to the path it was read from.
///
/// # Example
///
/// ```rust,no_run
/// use mkfile_fs::MakefileEditor;
///
/// let mut editor = MakefileEditor::open("Makefile")?;
/// editor.document_mut().set_assign("VERSION", "1.2.0")?;
/// editor.save()?;
/// # Ok::<(), mkfile_fs::Error>(())
/// ```
#[derive(Debug)]
pub struct MakefileEditor {
    path: PathBuf,
    document: Document,
}

impl MakefileEditor {
    /// Read and parse the Makefile at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let source = io::read_text(&path)?;
        let document = Document::parse(&source);
        tracing::debug!(
            path = %path.display(),
            sections = document.sections().len(),
            "Opened makefile"
        );
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Write the rendered document back to its path.
    ///
    /// Returns `false` without writing when the file already holds exactly
    /// the rendered text. Either way the document is re-parsed from that
    /// text afterwards, so `is_modified` is `false` until the next edit.
    pub fn save(&mut self) -> Result<bool> {
        let output = self.document.render();
        let written = if io::read_text(&self.path).is_ok_and(|on_disk| on_disk == output) {
            tracing::debug!(path = %self.path.display(), "Makefile unchanged; skipping write");
            false
        } else {
            io::write_text(&self.path, &output)?;
            tracing::info!(path = %self.path.display(), "Updated makefile");
            true
        };
        self.document = Document::parse(&output);
        Ok(written)
    }

    /// Write the rendered document to another path.
    ///
    /// The editor stays bound to its own path and its document keeps the
    /// original it was opened with.
    pub fn save_as(&self, path: &Path) -> Result<()> {
        io::write_text(path, &self.document.render())
    }
}
