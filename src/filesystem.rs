//! Filesystem helpers shared by the generators.
//!
//! Two write semantics live side by side on purpose:
//! - [`create_file_if_absent_or_empty`] never touches a non-empty file (lens scaffolding).
//! - [`write_file`] always overwrites (ingestion and depot configs).

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Creates `path` and all of its missing ancestors.
///
/// Succeeds when the directory already exists.
///
/// # Errors
/// * `Error::DirectoryCreateFailure` with the path and the underlying cause
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreateFailure {
        path: path.display().to_string(),
        source,
    })
}

/// Writes `content` to `path` unless the file already exists with non-zero size.
///
/// # Returns
/// * `Result<bool>` - `true` when the file was written, `false` when it was left untouched
///
/// # Notes
/// The existence check and the write are separate steps, so concurrent callers
/// targeting the same path can race. Single-process sequential use is assumed.
pub fn create_file_if_absent_or_empty<P: AsRef<Path>>(path: P, content: &str) -> Result<bool> {
    let path = path.as_ref();
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > 0 {
            debug!("Keeping non-empty file {}", path.display());
            return Ok(false);
        }
    }

    write_file(path, content)?;
    Ok(true)
}

/// Writes `content` to `path`, replacing whatever was there.
///
/// The parent directory must already exist.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| Error::FileWriteFailure {
        path: path.display().to_string(),
        source,
    })
}
