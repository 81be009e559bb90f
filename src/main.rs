//! texbuild - build a LaTeX document into a PDF and open it.
//!
//! Runs the TeX engine twice into a work directory (the second pass picks up
//! the cross-references recorded by the first), moves the PDF into the
//! project directory and opens it. `texbuild clean` removes the leftovers.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use texbuild::config::{Config, Overrides};
use texbuild::dispatch::{self, Command};
use texbuild::{commands, error};

#[derive(Parser)]
#[command(name = "texbuild", version)]
#[command(about = "Two-pass LaTeX build wrapper")]
#[command(
    after_help = "COMMANDS:\n  texbuild        Compile twice, move the PDF into place, open it\n  texbuild clean  Remove .aux/.log/... files and the work directory"
)]
struct Cli {
    /// `clean`, or nothing to build
    command: Option<String>,

    /// Project directory (default: $TEXBUILD_PROJECT_DIR from the process environment, not .env, else the current directory)
    #[arg(short = 'C', long)]
    project_dir: Option<PathBuf>,

    /// LaTeX source document (default: main.tex)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Work directory for compiler output (default: tmp)
    #[arg(short, long)]
    work_dir: Option<PathBuf>,

    /// Final PDF name, or `source` to reuse the input's name (default: report.pdf)
    #[arg(short, long)]
    output: Option<String>,

    /// TeX engine (default: pdflatex)
    #[arg(long)]
    compiler: Option<String>,

    /// Viewer command line (default: the OS file opener)
    #[arg(long)]
    viewer: Option<String>,

    /// Don't open the PDF after building
    #[arg(long)]
    no_open: bool,

    /// Check the engine, viewer and project directory, then exit
    #[arg(long)]
    preflight: bool,

    /// Print the resolved configuration, then exit
    #[arg(long)]
    show_config: bool,
}

fn project_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.project_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("TEXBUILD_PROJECT_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    std::env::current_dir().context("Cannot determine current directory")
}

fn run(cli: Cli) -> Result<()> {
    // An unknown command needs no configuration, so a broken .env can't hide it
    if let Command::Unknown(arg) = Command::parse(cli.command.as_deref()) {
        if !cli.show_config && !cli.preflight {
            dispatch::report_unknown(&arg);
            return Ok(());
        }
    }

    let overrides = Overrides {
        input: cli.input.clone(),
        work_dir: cli.work_dir.clone(),
        artifact: cli.output.clone(),
        compiler: cli.compiler.clone(),
        viewer: cli.viewer.clone(),
        no_open: cli.no_open,
    };
    let config = Config::load(&project_dir(&cli)?, &overrides)?;

    if cli.show_config {
        config.print();
        return Ok(());
    }
    if cli.preflight {
        return commands::cmd_preflight(&config);
    }

    dispatch::dispatch(cli.command.as_deref(), &config)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(error::exit_code_for(&e));
    }
}
