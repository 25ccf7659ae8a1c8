//! ReadMeMaker: draft a README.md from source files with an LLM
//!
//! This library reads a set of input files, sends their combined text to an
//! OpenAI-compatible chat-completion service (Groq by default), and writes
//! the generated README to disk.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod utils;

pub use error::{ReadmeError, Result};
