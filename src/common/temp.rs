//! Work directory handling.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// Make sure the work directory exists.
///
/// An existing directory (from a previous build) is reused as-is; its contents
/// are left alone so stale auxiliary files can still feed the next pass.
pub fn ensure_work_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::WorkDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove the work directory and everything in it.
///
/// Returns `true` if something was removed. A missing directory is not an error.
pub fn remove_work_dir(path: &Path) -> Result<bool, BuildError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(BuildError::WorkDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}
