//! Persisted config file loading

use crate::error::{ReadmeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the user-level config, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".readme-maker.toml";

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "READMEMAKER_CONFIG";

/// Optional defaults read from the persisted config file.
///
/// Unknown keys are ignored so the file can be shared with future versions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Location of the persisted config file.
///
/// `READMEMAKER_CONFIG` wins when set and non-empty; otherwise the file lives
/// at `~/.readme-maker.toml`. Returns `None` when no home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Load the persisted config file.
///
/// A missing file yields the empty config. A file that exists but cannot be
/// parsed is fatal: there is no fallback to defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let Some(config_file) = config_path else {
        tracing::debug!("No home directory detected; skipping config file");
        return Ok(FileConfig::default());
    };

    if !config_file.exists() {
        tracing::debug!("Config file {} not found; using defaults", config_file.display());
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(config_file).map_err(|source| ReadmeError::ConfigRead {
        path: config_file.to_path_buf(),
        source,
    })?;

    let parsed = parse_toml_config(&content, config_file)?;
    tracing::debug!("Loaded config file {}", config_file.display());
    Ok(parsed)
}

/// Parse TOML config, supporting a nested `[readme-maker]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<FileConfig> {
    let parse_error =
        |source: toml::de::Error| ReadmeError::ConfigParse { path: config_file.to_path_buf(), source };

    let raw: toml::Value = toml::from_str(content).map_err(parse_error)?;

    let config_val = match raw.get("readme-maker") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().map_err(parse_error)
}
