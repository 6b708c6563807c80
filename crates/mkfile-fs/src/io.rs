//! Atomic I/O operations with file locking

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a temporary sibling (same filesystem), syncs it, then renames
/// it over `path`. An existing target is held under an exclusive advisory
/// lock until the rename is done. The temporary file is removed whenever
/// the write fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    let target = lock_existing(path)?;

    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    let mut temp_file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| Error::io(parent, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    persist(temp_file, path)?;

    if let Some(target) = target {
        FileExt::unlock(&target).map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Open and exclusively lock `path` if it already exists.
fn lock_existing(path: &Path) -> Result<Option<File>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    FileExt::lock_exclusive(&file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    Ok(Some(file))
}

/// Rename the temporary file over `path`; on failure it is dropped and deleted.
fn persist(temp_file: NamedTempFile, path: &Path) -> Result<()> {
    temp_file
        .persist(path)
        .map(drop)
        .map_err(|e| Error::io(path, e.error))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
