//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

use anyhow::Result;

use crate::domain::CommandOutput;

pub mod auth;
pub mod backend;
pub mod check;
pub mod deploy;
pub mod frontend;
pub mod record;
pub mod tools;

/// Collapse a runner error into a failed `CommandOutput`.
///
/// Platform commands are best-effort: a command that could not be spawned or
/// timed out takes the same fallback path as one that exited non-zero.
pub(crate) fn settle(what: &str, result: Result<CommandOutput>) -> CommandOutput {
    let output = result.unwrap_or_else(|e| CommandOutput::not_run(format!("{e:#}")));
    if !output.success() {
        tracing::warn!(
            command = what,
            exit_code = ?output.exit_code,
            stderr = %output.stderr.trim(),
            "command failed"
        );
    }
    output
}
