//! Project directory checks.

use std::fs;
use std::path::Path;

use crate::config::Config;

use super::types::CheckResult;

pub fn check_project(config: &Config) -> Vec<CheckResult> {
    vec![check_input(&config.input_path()), check_writable(&config.project_dir)]
}

/// The input must exist and actually be a LaTeX document, not just any file.
fn check_input(input: &Path) -> CheckResult {
    let name = format!("input ({})", input.display());
    let content = match fs::read_to_string(input) {
        Ok(content) => content,
        Err(e) => return CheckResult::fail(&name, format!("Cannot read: {}", e)),
    };

    if content.contains("\\documentclass") {
        CheckResult::pass(&name)
    } else {
        CheckResult::warn(
            &name,
            "No \\documentclass found. Is this the top-level document?",
        )
    }
}

fn check_writable(dir: &Path) -> CheckResult {
    let name = format!("{} writable", dir.display());
    let probe = dir.join(".texbuild-preflight");
    match fs::write(&probe, "probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            CheckResult::pass(&name)
        }
        Err(e) => CheckResult::fail(&name, format!("Cannot write: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflight::types::CheckStatus;
    use tempfile::TempDir;

    #[test]
    fn test_input_checks() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("main.tex");
        let fragment = dir.path().join("intro.tex");
        fs::write(&doc, "\\documentclass{article}\n\\begin{document}\\end{document}\n").unwrap();
        fs::write(&fragment, "\\section{Intro}\n").unwrap();

        assert_eq!(check_input(&doc).status, CheckStatus::Pass);
        assert_eq!(check_input(&fragment).status, CheckStatus::Warn);
        assert_eq!(
            check_input(&dir.path().join("missing.tex")).status,
            CheckStatus::Fail
        );
    }

    #[test]
    fn test_writable_leaves_no_probe() {
        let dir = TempDir::new().unwrap();
        assert_eq!(check_writable(dir.path()).status, CheckStatus::Pass);
        assert!(!dir.path().join(".texbuild-preflight").exists());
    }
}
