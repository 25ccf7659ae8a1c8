//! Command-line interface for readme-maker

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod progress;

use crate::app::{generate_readme, Invocation};
use crate::client::GroqClient;
use crate::config::{default_config_path, CliOverrides, EnvSnapshot};
use progress::WithSpinner;

/// Generate a README.md file for the specified input files.
#[derive(Parser)]
#[command(name = "readme-maker")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The input files for which to generate a README.md
    #[arg(short, long, value_name = "FILE", num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Output file path (default: README.md in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Model to use (default: llama3-8b-8192)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API key (overrides the config file and GROQ_API_KEY)
    #[arg(short = 'k', long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(long)]
    pub verbose: bool,

    /// Show the version of the tool
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, rust_log.as_deref()))
        .try_init();

    load_dotenv();

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let env = EnvSnapshot::capture();
    let config_path = default_config_path();

    let invocation = Invocation {
        inputs: cli.input,
        overrides: CliOverrides { api_key: cli.api_key, model: cli.model, output: cli.output },
    };

    let written = generate_readme(invocation, &env, config_path.as_deref(), &cwd, |config| {
        Ok(WithSpinner::new(GroqClient::new(&config.base_url)?, "Generating README..."))
    })?;

    println!("README.md has been created at: {}", written.display());
    Ok(())
}

/// A valid, non-empty RUST_LOG is used as-is. Otherwise --verbose selects
/// DEBUG and the default is WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Load `.env` from the working directory without overriding variables
/// that are already set.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::{log_filter, Cli};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multiple_inputs_in_order() {
        let cli = Cli::try_parse_from(["readme-maker", "-i", "b.py", "a.py", "-m", "modelX"])
            .expect("parse");
        assert_eq!(cli.input, vec![PathBuf::from("b.py"), PathBuf::from("a.py")]);
        assert_eq!(cli.model.as_deref(), Some("modelX"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn input_is_required() {
        let err = Cli::try_parse_from(["readme-maker", "-o", "OUT.md"]).err().expect("usage error");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn short_v_prints_version() {
        let err = Cli::try_parse_from(["readme-maker", "-v"]).err().expect("version exit");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn rust_log_level_is_not_overridden() {
        let filter = log_filter(false, Some("debug")).to_string().to_lowercase();
        assert!(filter.contains("debug"));
        assert!(!filter.contains("warn"));
    }

    #[test]
    fn rust_log_target_directives_are_kept() {
        let filter = log_filter(true, Some("readme_maker=trace")).to_string().to_lowercase();
        assert!(filter.contains("readme_maker=trace"));
        assert!(!filter.contains("debug"));
    }

    #[test]
    fn verbose_flag_applies_without_rust_log() {
        assert!(log_filter(true, None).to_string().to_lowercase().contains("debug"));
        assert!(log_filter(false, Some("  ")).to_string().to_lowercase().contains("warn"));
    }
}
