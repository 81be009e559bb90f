//! External program checks.

use crate::config::Config;
use crate::process;

use super::types::CheckResult;

pub fn check_tools(config: &Config) -> Vec<CheckResult> {
    vec![check_compiler(config), check_viewer(config)]
}

fn check_compiler(config: &Config) -> CheckResult {
    let name = format!("compiler ({})", config.compiler);
    match process::which(&config.compiler) {
        Some(path) => CheckResult::pass_with(&name, path.display().to_string()),
        None => CheckResult::fail(
            &name,
            "Not found on PATH. Install a TeX distribution (TeX Live, MiKTeX) or set TEXBUILD_COMPILER.",
        ),
    }
}

fn check_viewer(config: &Config) -> CheckResult {
    let name = format!("viewer ({})", config.viewer.program);
    if !config.open_viewer {
        return CheckResult::pass_with(&name, "disabled");
    }
    match process::which(&config.viewer.program) {
        Some(path) => CheckResult::pass_with(&name, path.display().to_string()),
        None => CheckResult::warn(
            &name,
            "Not found on PATH. The PDF will be built but not opened. Set TEXBUILD_VIEWER or pass --no-open.",
        ),
    }
}
