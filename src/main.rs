//! readme-maker: Generate a README.md for a set of input files
//!
//! Reads the input files, asks a chat-completion model to draft a README
//! from their contents, and writes the response to disk.

use anyhow::Result;

mod app;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod prompt;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
