//! Clean action.

use anyhow::Result;
use std::path::Path;

use crate::clean::{self, CleanReport};
use crate::config::Config;

/// Remove byproduct files under the project directory and the work directory.
pub fn cmd_clean(config: &Config) -> Result<CleanReport> {
    let work_dir = config.work_dir_path();
    let report = clean::clean(&config.project_dir, &work_dir)?;

    for file in &report.files_removed {
        println!("Removed {}", relative(file, &config.project_dir).display());
    }
    if report.work_dir_removed {
        println!("Removed {}", relative(&work_dir, &config.project_dir).display());
    }

    if report.files_removed.is_empty() && !report.work_dir_removed {
        println!("Nothing to clean.");
    } else {
        println!("Clean complete ({} file(s)).", report.files_removed.len());
    }

    Ok(report)
}

fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
