//! Error kinds for the README generation pipeline

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReadmeError {
    #[error(
        "API key must be provided via --api-key, the config file, or the GROQ_API_KEY environment variable"
    )]
    MissingCredential,

    #[error("Failed to parse config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed reading config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Completion API error: {0}")]
    Api(String),

    #[error("Completion API returned no choices")]
    EmptyResponse,

    #[error("Failed to write output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReadmeError>;
