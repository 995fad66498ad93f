//! Infrastructure adapter for the Railway CLI (backend platform).
//!
//! `RailwayCli<R>` routes every `railway` invocation through a
//! `CommandRunner`, always with the backend directory as working directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{BackendPlatform, CommandRunner, PlatformSession};
use crate::domain::CommandOutput;
use crate::domain::config::BackendConfig;

/// Backend platform adapter. Generic over `R: CommandRunner` so that tests
/// can inject a mock runner without spawning real processes.
pub struct RailwayCli<'a, R: CommandRunner> {
    runner: &'a R,
    bin: String,
    dir: PathBuf,
}

impl<'a, R: CommandRunner> RailwayCli<'a, R> {
    pub fn new(runner: &'a R, config: &BackendConfig) -> Self {
        Self {
            runner,
            bin: config.cli.clone(),
            dir: config.dir.clone(),
        }
    }

    async fn railway(&self, args: &[&str]) -> Result<CommandOutput> {
        self.runner
            .run(&self.bin, args, Some(&self.dir))
            .await
            .with_context(|| format!("{} {}", self.bin, args.first().unwrap_or(&"")))
    }
}

impl<R: CommandRunner> PlatformSession for RailwayCli<'_, R> {
    fn platform(&self) -> &str {
        "Railway"
    }

    fn cli(&self) -> &str {
        &self.bin
    }

    async fn whoami(&self) -> Result<CommandOutput> {
        self.railway(&["whoami"]).await
    }

    async fn login(&self) -> Result<CommandOutput> {
        self.runner
            .run_interactive(&self.bin, &["login"], Some(&self.dir))
            .await
            .context("railway login")
    }
}

impl<R: CommandRunner> BackendPlatform for RailwayCli<'_, R> {
    async fn link_status(&self) -> Result<CommandOutput> {
        self.railway(&["status"]).await
    }

    async fn create_project(&self, name: &str) -> Result<CommandOutput> {
        self.railway(&["init", "--name", name]).await
    }

    async fn add_database(&self, kind: &str) -> Result<CommandOutput> {
        self.railway(&["add", "--database", kind]).await
    }

    async fn set_variable(&self, key: &str, value: &str) -> Result<CommandOutput> {
        let assignment = format!("{key}={value}");
        self.railway(&["variables", "--set", &assignment]).await
    }

    async fn deploy_detached(&self) -> Result<CommandOutput> {
        self.railway(&["up", "--detach"]).await
    }

    async fn deployment_status(&self) -> Result<CommandOutput> {
        // Project-wide `status --json` also lists the database service.
        self.railway(&["service", "status", "--json"]).await
    }

    async fn domain(&self) -> Result<CommandOutput> {
        self.railway(&["domain"]).await
    }
}
