//! Merging CLI arguments, the config file, and the environment

use super::loader::FileConfig;
use crate::error::{ReadmeError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";

/// Values supplied explicitly on the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub output: Option<PathBuf>,
}

/// The environment values the resolver reads, captured once per run.
#[derive(Debug, Default, Clone)]
pub struct EnvSnapshot {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self { api_key: std::env::var(API_KEY_ENV).ok(), base_url: std::env::var(BASE_URL_ENV).ok() }
    }
}

/// The merged configuration used for a single run.
#[derive(Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub api_key: String,
    pub model: String,
    pub output_path: PathBuf,
    pub base_url: String,
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("output_path", &self.output_path)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Cli,
    ConfigFile,
    Environment,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSource::Cli => "command line",
            ConfigSource::ConfigFile => "config file",
            ConfigSource::Environment => "environment",
            ConfigSource::Default => "default",
        };
        f.write_str(label)
    }
}

/// First non-blank candidate wins. Order of `candidates` is the precedence.
fn first_match<'a>(candidates: &[(ConfigSource, Option<&'a str>)]) -> Option<(ConfigSource, &'a str)> {
    candidates.iter().find_map(|(source, value)| {
        value.map(str::trim).filter(|v| !v.is_empty()).map(|v| (*source, v))
    })
}

/// Build the effective configuration from the three configuration sources.
///
/// `cwd` anchors the default output path. Nothing here touches the
/// filesystem or the process environment.
pub fn resolve_effective_config(
    cli: CliOverrides,
    env: &EnvSnapshot,
    file: &FileConfig,
    cwd: &Path,
) -> Result<EffectiveConfig> {
    let (key_source, api_key) = first_match(&[
        (ConfigSource::Cli, cli.api_key.as_deref()),
        (ConfigSource::ConfigFile, file.api_key.as_deref()),
        (ConfigSource::Environment, env.api_key.as_deref()),
    ])
    .ok_or(ReadmeError::MissingCredential)?;
    tracing::debug!("API key taken from {}", key_source);

    let (model_source, model) = first_match(&[
        (ConfigSource::Cli, cli.model.as_deref()),
        (ConfigSource::ConfigFile, file.model.as_deref()),
        (ConfigSource::Default, Some(DEFAULT_MODEL)),
    ])
    .unwrap_or((ConfigSource::Default, DEFAULT_MODEL));
    tracing::debug!("Model {} taken from {}", model, model_source);

    let (url_source, base_url) = first_match(&[
        (ConfigSource::ConfigFile, file.base_url.as_deref()),
        (ConfigSource::Environment, env.base_url.as_deref()),
        (ConfigSource::Default, Some(DEFAULT_BASE_URL)),
    ])
    .unwrap_or((ConfigSource::Default, DEFAULT_BASE_URL));
    tracing::debug!("Base URL {} taken from {}", base_url, url_source);

    let output_path = match cli.output {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => cwd.join(DEFAULT_OUTPUT_FILE),
    };

    Ok(EffectiveConfig {
        api_key: api_key.to_string(),
        model: model.to_string(),
        output_path,
        base_url: base_url.trim_end_matches('/').to_string(),
    })
}
