//! Action handlers.
//!
//! - `build` - compile twice, move the PDF into place, open it
//! - `clean` - remove byproducts and the work directory
//! - `preflight` - check the environment without building

pub mod build;
pub mod clean;
mod preflight;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use preflight::cmd_preflight;
