//! texbuild - two-pass LaTeX build wrapper.
//!
//! Exposed as a library so the integration tests can drive [`dispatch::dispatch`].

pub mod clean;
pub mod commands;
pub mod common;
pub mod compile;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod preflight;
pub mod process;
pub mod timing;
pub mod viewer;
