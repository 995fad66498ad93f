//! Typed result of an external command invocation.

/// Captured outcome of one external command.
///
/// Success is decided by the exit code alone. `stdout`/`stderr` are only
/// used to extract fields (URLs, versions, deployment status).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Process exit code. `None` when the process could not be spawned,
    /// timed out, or was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Build an output from a finished process.
    #[must_use]
    pub fn new(exit_code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            exit_code,
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }

    /// An invocation that never produced an exit code (spawn failure or
    /// timeout). The reason is kept in `stderr` for diagnostics.
    #[must_use]
    pub fn not_run(reason: impl Into<String>) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }

    /// `true` when the process exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Trimmed stdout, or `None` when the command failed or printed nothing.
    #[must_use]
    pub fn stdout_text(&self) -> Option<&str> {
        if !self.success() {
            return None;
        }
        let text = self.stdout.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Stdout followed by stderr. CLIs disagree on which stream carries
    /// the interesting lines, so extraction scans both.
    #[must_use]
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }

    /// Short human-readable failure description for logs and warnings.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        let detail = self.stderr.trim();
        let detail = detail.lines().last().unwrap_or("");
        match (self.exit_code, detail.is_empty()) {
            (Some(code), true) => format!("exit code {code}"),
            (Some(code), false) => format!("exit code {code}: {detail}"),
            (None, true) => "did not run".to_string(),
            (None, false) => detail.to_string(),
        }
    }
}
