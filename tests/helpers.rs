//! Shared test utilities: a temporary project with mock engine and viewer.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use texbuild::config::{Config, Viewer};

/// Mock engine. Logs each call and writes `<jobname>.pdf` whose content
/// names the pass number ("pass 1", "pass 2", ...).
const MOCK_COMPILER: &str = r#"#!/bin/sh
log="$(dirname "$0")/compiler.log"
echo "$*" >> "$log"
outdir=.
for arg in "$@"; do
    case "$arg" in
        -output-directory=*) outdir="${arg#-output-directory=}" ;;
    esac
    input="$arg"
done
job="$(basename "$input" .tex)"
pass="$(wc -l < "$log" | tr -d ' ')"
printf 'pass %s\n' "$pass" > "$outdir/$job.pdf"
printf '\\relax\n' > "$outdir/$job.aux"
printf 'This is a mock engine\n' > "$outdir/$job.log"
"#;

/// Mock engine that logs the call and fails like a LaTeX error does.
const FAILING_COMPILER: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/compiler.log"
echo "! Undefined control sequence." >&2
exit 1
"#;

/// Mock engine that succeeds without producing anything.
const SILENT_COMPILER: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/compiler.log"
exit 0
"#;

const MOCK_VIEWER: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/viewer.log"
"#;

/// A throwaway project directory plus a `bin/` holding the mock tools.
pub struct TestEnv {
    /// Kept alive for the lifetime of the env
    pub _temp_dir: TempDir,
    pub project: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let bin = temp_dir.path().join("bin");
        fs::create_dir_all(&project).expect("Failed to create project dir");
        fs::create_dir_all(&bin).expect("Failed to create bin dir");

        fs::write(
            project.join("main.tex"),
            "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}\n",
        )
        .expect("Failed to write main.tex");

        write_script(&bin.join("mock-latex"), MOCK_COMPILER);
        write_script(&bin.join("failing-latex"), FAILING_COMPILER);
        write_script(&bin.join("silent-latex"), SILENT_COMPILER);
        write_script(&bin.join("mock-viewer"), MOCK_VIEWER);

        Self {
            _temp_dir: temp_dir,
            project,
            bin,
        }
    }

    /// Config wired to the mock engine and viewer.
    pub fn config(&self) -> Config {
        self.config_with_compiler("mock-latex")
    }

    pub fn config_with_compiler(&self, compiler: &str) -> Config {
        let mut config = Config::new(&self.project);
        config.compiler = self.bin.join(compiler).to_string_lossy().into_owned();
        config.viewer = Viewer {
            program: self.bin.join("mock-viewer").to_string_lossy().into_owned(),
            args: Vec::new(),
        };
        config
    }

    pub fn compiler_calls(&self) -> Vec<String> {
        read_lines(&self.bin.join("compiler.log"))
    }

    pub fn viewer_calls(&self) -> Vec<String> {
        read_lines(&self.bin.join("viewer.log"))
    }

    /// Every path under the project, relative and sorted.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(&self.project)
            .into_iter()
            .map(|e| e.expect("walk failed").path().strip_prefix(&self.project).unwrap().to_path_buf())
            .collect();
        paths.sort();
        paths
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write mock script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn assert_file_contains(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert!(
        content.contains(expected),
        "File {} does not contain {:?}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}
