//! Shared utilities

pub mod encoding;
pub mod paths;

pub use encoding::read_file_safe;
pub use paths::{absolute_path, resolve_write_target};
