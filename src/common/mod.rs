//! Filesystem helpers shared by the build and clean actions.

pub mod files;
pub mod temp;

pub use files::move_file;
pub use temp::{ensure_work_dir, remove_work_dir};
