//! Preflight action.

use anyhow::Result;

use crate::config::Config;
use crate::preflight;

pub fn cmd_preflight(config: &Config) -> Result<()> {
    preflight::run_preflight_or_fail(config)
}
