//! Opening the finished PDF.

use anyhow::Result;
use std::path::Path;

use crate::config::Viewer;
use crate::error::BuildError;
use crate::process::{self, Cmd};

pub fn viewer_command(viewer: &Viewer, document: &Path) -> Cmd {
    Cmd::new(&viewer.program).args(&viewer.args).arg(document)
}

/// Hand `document` to the viewer and wait for the launcher to return.
///
/// Platform openers (`xdg-open`, `open`, `start`) detach from the viewer
/// they launch, so this returns as soon as the launcher exits, not when the
/// viewer window is closed.
pub fn open(viewer: &Viewer, document: &Path) -> Result<()> {
    let status = viewer_command(viewer, document).run_interactive()?;
    if !status.success() {
        return Err(BuildError::ViewerFailed {
            program: viewer.program.clone(),
            code: process::exit_code(status),
        }
        .into());
    }
    Ok(())
}
