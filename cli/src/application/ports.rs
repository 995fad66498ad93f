//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::{CommandOutput, TandemConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Every call names its working directory explicitly; implementations must
/// never change the working directory of the current process.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture stdout/stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. A non-zero exit is NOT an error; it is reported
    /// through `CommandOutput::exit_code`.
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>)
    -> Result<CommandOutput>;

    /// Run a program attached to the terminal (inherited stdio) and wait for
    /// it. Used for browser logins and installers that talk to the operator.
    /// The returned output carries only the exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    async fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput>;
}

// ── Platform Ports ────────────────────────────────────────────────────────────

/// Login state of a platform CLI.
#[allow(async_fn_in_trait)]
pub trait PlatformSession {
    /// Human-facing platform name, e.g. `"Railway"`.
    fn platform(&self) -> &str;
    /// CLI binary name, e.g. `"railway"`.
    fn cli(&self) -> &str;
    /// Query the logged-in identity.
    async fn whoami(&self) -> Result<CommandOutput>;
    /// Interactive browser login. Blocks until the operator finishes.
    async fn login(&self) -> Result<CommandOutput>;
}

/// Backend hosting platform operations. All calls run in the backend
/// project directory.
#[allow(async_fn_in_trait)]
pub trait BackendPlatform: PlatformSession {
    /// Whether the directory is linked to a project.
    async fn link_status(&self) -> Result<CommandOutput>;
    /// Create a project with the given name and link the directory to it.
    async fn create_project(&self, name: &str) -> Result<CommandOutput>;
    /// Provision a managed database add-on, e.g. `"mysql"`.
    async fn add_database(&self, kind: &str) -> Result<CommandOutput>;
    /// Set one environment variable in the project's store.
    async fn set_variable(&self, key: &str, value: &str) -> Result<CommandOutput>;
    /// Upload and deploy without waiting for the build.
    async fn deploy_detached(&self) -> Result<CommandOutput>;
    /// Query the latest deployment status of the linked service only.
    async fn deployment_status(&self) -> Result<CommandOutput>;
    /// Query (or generate) the public domain.
    async fn domain(&self) -> Result<CommandOutput>;
}

/// Frontend hosting platform operations. All calls run in the frontend
/// project directory.
#[allow(async_fn_in_trait)]
pub trait FrontendPlatform: PlatformSession {
    /// Production deployment; output is captured for URL extraction.
    async fn deploy_production(&self) -> Result<CommandOutput>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit a section header.
    fn header(&self, message: &str);
    /// Emit an informational message.
    fn info(&self, message: &str);
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message.
    fn error(&self, message: &str);
}

// ── Operator Prompt Port ──────────────────────────────────────────────────────

/// Console questions for the operator.
#[allow(async_fn_in_trait)]
pub trait OperatorPrompt {
    /// Ask for a URL. `None` when the operator entered nothing or prompting
    /// is disabled.
    async fn ask_url(&self, prompt: &str) -> Result<Option<String>>;
    /// Ask a yes/no question.
    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

// ── Filesystem and Config Ports ───────────────────────────────────────────────

/// Abstracts the local file writes the deployment performs.
pub trait LocalFs {
    /// Create or overwrite `path` with `content`.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Abstracts loading of `tandem.yaml`.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when the file is
    /// absent.
    fn load(&self) -> Result<TandemConfig>;
    /// Location of the configuration file.
    fn path(&self) -> PathBuf;
}
