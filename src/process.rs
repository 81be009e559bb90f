//! External program execution.
//!
//! Every external tool (the TeX engine, the document viewer) goes through
//! [`Cmd`], so spawn failures and exit codes are reported the same way.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Exit code of a status, or -1 if terminated by signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Builder for a single external program invocation.
#[derive(Debug, Clone)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl Cmd {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Run inside `dir` instead of the caller's working directory.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Printable command line, for progress output.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run attached to the terminal and wait for the program itself to exit.
    ///
    /// No pipes are created, so children the program leaves running in the
    /// background (a viewer started by `xdg-open`) don't keep us waiting.
    /// A non-zero exit is returned as a status, not an error; only a failure
    /// to start the program is an error.
    pub fn run_interactive(self) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        cmd.status().with_context(|| {
            format!(
                "Failed to execute '{}'. Is it installed?",
                self.program.to_string_lossy()
            )
        })
    }
}

/// Resolve a program on PATH. Programs given as a path are checked directly.
pub fn which(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

pub fn exists(program: &str) -> bool {
    which(program).is_some()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        let status = Cmd::new("true").run_interactive().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_failure_is_status_not_error() {
        let status = Cmd::new("false").run_interactive().unwrap();
        assert!(!status.success());
        assert_eq!(exit_code(status), 1);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = Cmd::new("texbuild_no_such_program")
            .run_interactive()
            .unwrap_err();
        assert!(err.to_string().contains("Is it installed?"));
    }

    #[test]
    fn test_runs_in_directory() {
        let status = Cmd::new("sh")
            .args(["-c", "test \"$(pwd)\" = /"])
            .dir(Path::new("/"))
            .run_interactive()
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_display_joins_arguments() {
        let cmd = Cmd::new("pdflatex")
            .arg("-output-directory=tmp")
            .arg("main.tex");
        assert_eq!(cmd.display(), "pdflatex -output-directory=tmp main.tex");
    }

    #[test]
    fn test_which() {
        assert!(exists("sh"));
        assert!(which("texbuild_no_such_program").is_none());
    }
}
