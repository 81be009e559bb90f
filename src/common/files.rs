//! Moving the finished document into place.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// Move `from` to `to`, replacing any file already at `to`.
///
/// Falls back to copy + remove when a plain rename is refused, which happens
/// when the work directory sits on another filesystem.
pub fn move_file(from: &Path, to: &Path) -> Result<(), BuildError> {
    let relocate_err = |source: io::Error| BuildError::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if !from.is_file() {
        return Err(BuildError::ArtifactMissing {
            path: from.to_path_buf(),
        });
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(relocate_err)?;
    }

    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to).map_err(relocate_err)?;
    fs::remove_file(from).map_err(relocate_err)?;
    Ok(())
}
