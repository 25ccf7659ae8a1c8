//! Configuration loading and merging
//!
//! Handles loading the persisted user config file and merging it with
//! environment variables and CLI arguments into one effective configuration
//! (CLI > Config file > Env > Defaults).

pub mod loader;
pub mod merge;

pub use loader::{default_config_path, load_config};
pub use merge::{resolve_effective_config, CliOverrides, EffectiveConfig, EnvSnapshot};
