//! Terminal progress feedback while waiting on the completion API.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use crate::client::{ChatMessage, CompletionClient};
use crate::error::Result;

/// Wraps a client and shows a spinner on stderr for the duration of each
/// request. The spinner is skipped when stderr is not a terminal.
pub struct WithSpinner<C> {
    inner: C,
    message: &'static str,
}

impl<C> WithSpinner<C> {
    pub fn new(inner: C, message: &'static str) -> Self {
        Self { inner, message }
    }
}

impl<C: CompletionClient> CompletionClient for WithSpinner<C> {
    fn send(&self, model: &str, api_key: &str, messages: &[ChatMessage]) -> Result<String> {
        let spinner = std::io::stderr().is_terminal().then(|| start_spinner(self.message));
        let result = self.inner.send(model, api_key, messages);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }
}

fn start_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
