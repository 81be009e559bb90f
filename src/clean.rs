//! Build byproduct removal.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::common::remove_work_dir;
use crate::error::BuildError;

/// Extensions of files LaTeX and its helpers leave next to the sources.
pub const BYPRODUCT_EXTENSIONS: &[&str] = &[
    "aux", "toc", "log", "out", "lof", "lot", "bbl", "blg",
    // glossaries acronym lists
    "acn", "acr", "alg",
];

/// What a clean removed.
#[derive(Debug, Default)]
pub struct CleanReport {
    pub files_removed: Vec<PathBuf>,
    pub work_dir_removed: bool,
}

/// True if `path` has one of the byproduct extensions (case-insensitive).
pub fn is_byproduct(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            BYPRODUCT_EXTENSIONS
                .iter()
                .any(|b| b.eq_ignore_ascii_case(ext))
        })
}

/// Delete every byproduct file under `root`. Symlinks are not followed.
pub fn remove_byproducts(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            // A directory vanishing mid-walk is fine; anything else is not
            Err(e) if e.io_error().map(|io| io.kind()) == Some(std::io::ErrorKind::NotFound) => {
                continue
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to walk {}", root.display())),
        };

        if !entry.file_type().is_file() || !is_byproduct(entry.path()) {
            continue;
        }

        fs::remove_file(entry.path())
            .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
        removed.push(entry.into_path());
    }

    Ok(removed)
}

/// Refuse a work directory whose removal would take `root` with it.
///
/// A work directory that does not exist is accepted; there is nothing to remove.
pub fn check_work_dir(root: &Path, work_dir: &Path) -> Result<(), BuildError> {
    let Ok(work_dir) = fs::canonicalize(work_dir) else {
        return Ok(());
    };
    let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

    if root.starts_with(&work_dir) {
        return Err(BuildError::WorkDirContainsProject {
            work_dir,
            project_dir: root,
        });
    }
    Ok(())
}

/// Remove byproducts under `root`, then the whole work directory.
///
/// Nothing is touched if the work directory is `root` or one of its parents.
pub fn clean(root: &Path, work_dir: &Path) -> Result<CleanReport> {
    check_work_dir(root, work_dir)?;
    let files_removed = remove_byproducts(root)?;
    let work_dir_removed = remove_work_dir(work_dir)?;
    Ok(CleanReport {
        files_removed,
        work_dir_removed,
    })
}
