//! Infrastructure adapter for the Vercel CLI (frontend platform).

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, FrontendPlatform, PlatformSession};
use crate::domain::CommandOutput;
use crate::domain::config::FrontendConfig;

/// Frontend platform adapter; every call runs in the frontend directory.
pub struct VercelCli<'a, R: CommandRunner> {
    runner: &'a R,
    bin: String,
    dir: PathBuf,
}

impl<'a, R: CommandRunner> VercelCli<'a, R> {
    pub fn new(runner: &'a R, config: &FrontendConfig) -> Self {
        Self {
            runner,
            bin: config.cli.clone(),
            dir: config.dir.clone(),
        }
    }
}

impl<R: CommandRunner> PlatformSession for VercelCli<'_, R> {
    fn platform(&self) -> &str {
        "Vercel"
    }

    fn cli(&self) -> &str {
        &self.bin
    }

    async fn whoami(&self) -> Result<CommandOutput> {
        self.runner
            .run(&self.bin, &["whoami"], Some(&self.dir))
            .await
            .context("vercel whoami")
    }

    async fn login(&self) -> Result<CommandOutput> {
        self.runner
            .run_interactive(&self.bin, &["login"], Some(&self.dir))
            .await
            .context("vercel login")
    }
}

impl<R: CommandRunner> FrontendPlatform for VercelCli<'_, R> {
    async fn deploy_production(&self) -> Result<CommandOutput> {
        self.runner
            .run(&self.bin, &["--prod", "--yes"], Some(&self.dir))
            .await
            .context("vercel --prod")
    }
}
