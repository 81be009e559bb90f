//! Typed build failures.

use std::path::PathBuf;
use thiserror::Error;

/// Failures the build and clean actions report distinctly.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured TeX engine is not on PATH.
    #[error("Compiler '{program}' not found on PATH")]
    CompilerNotFound { program: String },

    /// The TeX engine exited non-zero.
    #[error(
        "Compilation of {} failed on pass {pass}/{total} (exit code {code})",
        input.display(),
        total = crate::compile::PASSES
    )]
    CompileFailed {
        pass: u8,
        code: i32,
        input: PathBuf,
    },

    /// Both passes succeeded but no PDF was produced where expected.
    #[error("Expected output {} was not produced", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The produced PDF could not be moved into place.
    #[error("Failed to move {} to {}", from.display(), to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The work directory could not be created or removed.
    #[error("Work directory {} is unusable", path.display())]
    WorkDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The work directory is the project directory or one of its parents.
    #[error(
        "Refusing to remove work directory {}: it contains the project directory {}",
        work_dir.display(),
        project_dir.display()
    )]
    WorkDirContainsProject {
        work_dir: PathBuf,
        project_dir: PathBuf,
    },

    /// The viewer exited non-zero.
    #[error("Viewer '{program}' exited with code {code}")]
    ViewerFailed { program: String, code: i32 },
}

impl BuildError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CompilerNotFound { .. } => 127,
            Self::CompileFailed { code, .. } if *code > 0 => *code,
            Self::CompileFailed { .. } => 1,
            Self::ArtifactMissing { .. } | Self::Relocate { .. } => 2,
            Self::WorkDir { .. } | Self::WorkDirContainsProject { .. } => 3,
            Self::ViewerFailed { .. } => 4,
        }
    }
}

/// Exit code for an error chain: the first `BuildError` found decides, else 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<BuildError>())
        .map(BuildError::exit_code)
        .unwrap_or(1)
}
