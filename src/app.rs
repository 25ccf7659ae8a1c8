//! The README generation pipeline
//!
//! config resolution → prompt assembly → completion → output write.
//! Every step runs to completion before the next starts and the first
//! error ends the run.

use crate::client::{complete, CompletionClient};
use crate::config::{load_config, resolve_effective_config, CliOverrides, EffectiveConfig, EnvSnapshot};
use crate::error::Result;
use crate::output::write_output;
use crate::prompt::build_prompt;
use std::path::{Path, PathBuf};

/// Everything the user asked for on the command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub inputs: Vec<PathBuf>,
    pub overrides: CliOverrides,
}

/// Run the pipeline once.
///
/// `connect` builds the completion client from the resolved configuration;
/// it is only called after configuration and inputs are known to be valid.
///
/// # Returns
/// The absolute path of the written README
pub fn generate_readme<C, F>(
    invocation: Invocation,
    env: &EnvSnapshot,
    config_path: Option<&Path>,
    cwd: &Path,
    connect: F,
) -> Result<PathBuf>
where
    C: CompletionClient,
    F: FnOnce(&EffectiveConfig) -> Result<C>,
{
    let file_config = load_config(config_path)?;
    let config = resolve_effective_config(invocation.overrides, env, &file_config, cwd)?;
    tracing::debug!("Effective configuration: {:?}", config);

    let prompt = build_prompt(&invocation.inputs)?;
    tracing::info!("Combined {} input file(s) into {} bytes", invocation.inputs.len(), prompt.len());

    let client = connect(&config)?;
    let readme = complete(&client, &prompt, &config.model, &config.api_key)?;

    write_output(&config.output_path, &readme)
}
