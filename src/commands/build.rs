//! Build action.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

use crate::common::{ensure_work_dir, move_file};
use crate::compile;
use crate::config::Config;
use crate::error::BuildError;
use crate::timing::Timer;
use crate::viewer;

/// Compile the document, move the PDF to its final place and open it.
///
/// Returns the path of the final PDF.
pub fn cmd_build(config: &Config) -> Result<PathBuf> {
    println!("=== Build {} ===", config.input.display());
    let build_start = Instant::now();

    compile::require_compiler(config)?;

    let work_dir = config.work_dir_path();
    ensure_work_dir(&work_dir)?;

    compile::compile(config)?;

    let produced = config.produced_pdf();
    if !produced.is_file() {
        return Err(BuildError::ArtifactMissing { path: produced }.into());
    }

    let artifact = config.artifact_path();
    let t = Timer::start(format!("Move to {}", artifact.display()));
    move_file(&produced, &artifact)?;
    t.finish();

    println!(
        "\nBuilt {} in {:.1}s",
        artifact.display(),
        build_start.elapsed().as_secs_f64()
    );

    if config.open_viewer {
        if let Err(e) = viewer::open(&config.viewer, &artifact) {
            eprintln!("[WARN] Could not open {}: {:#}", artifact.display(), e);
        }
    }

    Ok(artifact)
}
