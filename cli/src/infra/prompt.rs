//! Terminal implementation of the `OperatorPrompt` port.
//!
//! dialoguer blocks on stdin, so prompts run on tokio's blocking pool; the
//! caller's Ctrl-C handler keeps working while the operator is typing.

use anyhow::{Context, Result};

use crate::application::ports::OperatorPrompt;
use crate::domain::DeployError;

/// Asks on the terminal, or answers with defaults when non-interactive.
pub struct DialoguerPrompt {
    non_interactive: bool,
}

impl DialoguerPrompt {
    /// `non_interactive` disables every prompt (`--yes`, `CI`, `TANDEM_YES`).
    #[must_use]
    pub fn new(non_interactive: bool) -> Self {
        Self { non_interactive }
    }
}

impl OperatorPrompt for DialoguerPrompt {
    async fn ask_url(&self, prompt: &str) -> Result<Option<String>> {
        if self.non_interactive {
            tracing::debug!(prompt, "non-interactive: skipping URL prompt");
            return Ok(None);
        }
        let prompt = prompt.to_owned();
        let answer = tokio::task::spawn_blocking(move || {
            dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        })
        .await
        .context("prompt task failed")?
        .map_err(|e| prompt_error(e, "reading URL from terminal"))?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_owned()))
    }

    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let prompt = prompt.to_owned();
        tokio::task::spawn_blocking(move || {
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
        })
        .await
        .context("prompt task failed")?
        .map_err(|e| prompt_error(e, "reading confirmation from terminal"))
    }
}

/// The terminal is in raw mode while dialoguer reads, so Ctrl-C arrives as
/// an `Interrupted` read instead of SIGINT.
fn prompt_error(err: dialoguer::Error, action: &'static str) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            DeployError::Cancelled.into()
        }
        other => anyhow::Error::new(other).context(action),
    }
}
