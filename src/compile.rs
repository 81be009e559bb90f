//! Two-pass document compilation.
//!
//! LaTeX resolves cross-references, the table of contents and citations from
//! the `.aux` data of the previous run, so the engine always runs twice, one
//! pass after the other. A failed pass stops the build; the second pass and
//! the relocation step never see a broken first pass.

use anyhow::Result;

use crate::config::Config;
use crate::error::BuildError;
use crate::process::{self, Cmd};
use crate::timing::Timer;

/// Number of engine runs per build.
pub const PASSES: u8 = 2;

/// The engine command line for one pass.
pub fn compiler_command(config: &Config) -> Cmd {
    let mut output_dir = std::ffi::OsString::from("-output-directory=");
    output_dir.push(config.work_dir_path());

    Cmd::new(&config.compiler)
        .args(&config.compiler_args)
        .arg(output_dir)
        .arg(config.input_path())
        .dir(&config.project_dir)
}

/// Fail fast if the engine cannot be found.
pub fn require_compiler(config: &Config) -> Result<(), BuildError> {
    if process::exists(&config.compiler) {
        Ok(())
    } else {
        Err(BuildError::CompilerNotFound {
            program: config.compiler.clone(),
        })
    }
}

/// Run one engine pass with its output streamed to the terminal.
pub fn run_pass(config: &Config, pass: u8) -> Result<()> {
    let cmd = compiler_command(config);
    println!("\n[{}/{}] {}", pass, PASSES, cmd.display());

    let timer = Timer::start(format!("{} pass {}/{}", config.compiler, pass, PASSES));
    let status = cmd.run_interactive()?;
    timer.finish();

    if !status.success() {
        return Err(BuildError::CompileFailed {
            pass,
            code: process::exit_code(status),
            input: config.input.clone(),
        }
        .into());
    }
    Ok(())
}

/// Run every pass in order, stopping at the first failure.
pub fn compile(config: &Config) -> Result<()> {
    for pass in 1..=PASSES {
        run_pass(config, pass)?;
    }
    Ok(())
}
