//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::application::ports::CommandRunner;
use crate::domain::CommandOutput;

/// Production `CommandRunner` — uses tokio for async process execution
/// with guaranteed timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires. This implementation uses
/// `tokio::select!` with explicit `child.kill()` so the process is terminated.
pub struct TokioCommandRunner {
    timeout: Duration,
    interactive_stdout_to_stderr: bool,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interactive_stdout_to_stderr: false,
        }
    }

    /// Send the stdout of interactive commands (installers, logins) to
    /// stderr. Used with `--json`, where stdout carries one document only.
    #[must_use]
    pub fn interactive_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.interactive_stdout_to_stderr = enabled;
        self
    }
}

/// Arguments as they may appear in logs: the value of every `--set KEY=VALUE`
/// is replaced, since variable values include generated secrets.
#[must_use]
pub fn loggable_args(args: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut after_set = false;
    for arg in args {
        match arg.split_once('=') {
            Some((key, _)) if after_set => out.push(format!("{key}=<redacted>")),
            _ => out.push((*arg).to_owned()),
        }
        after_set = *arg == "--set";
    }
    out
}

fn command(program: &str, args: &[&str], cwd: Option<&Path>) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).kill_on_drop(true);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd
}

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput> {
        tracing::debug!(program, args = ?loggable_args(args), ?cwd, "running command");
        let mut child = command(program, args, cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                let status = status.with_context(|| format!("waiting for {program}"))?;
                Ok(CommandOutput::new(status.code(), &stdout, &stderr))
            } => result,
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", self.timeout.as_secs())
            }
        }
    }

    async fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput> {
        tracing::debug!(
            program,
            args = ?loggable_args(args),
            ?cwd,
            "running interactive command"
        );
        let mut cmd = command(program, args, cwd);
        if self.interactive_stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        }
        let status = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))?;
        Ok(CommandOutput::new(status.code(), &[], &[]))
    }
}
