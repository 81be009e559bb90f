//! Preflight checks.
//!
//! Verifies the engine, the viewer and the project directory before a build,
//! so a missing TeX installation shows up as one clear line instead of a
//! spawn error halfway through.

mod environment;
mod tools;
mod types;

use anyhow::{bail, Result};

use crate::config::Config;

pub use types::{CheckResult, CheckStatus, PreflightReport};

pub fn run_preflight(config: &Config) -> PreflightReport {
    let mut checks = tools::check_tools(config);
    checks.extend(environment::check_project(config));
    PreflightReport { checks }
}

/// Print the report and fail if any check failed.
pub fn run_preflight_or_fail(config: &Config) -> Result<()> {
    let report = run_preflight(config);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before building.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed.");
    Ok(())
}
