//! Human-readable terminal renderer.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;

use crate::application::services::deploy::DeployOutcome;
use crate::domain::{DeployConfirmation, ReadinessChecks, TandemConfig};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("tandem {version}");
    }

    /// Render the deployment summary.
    pub fn render_deploy(&self, outcome: &DeployOutcome) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header("Deployment complete!");
        println!("{}", outcome.record_text);

        if let DeployConfirmation::NotConfirmed { .. } = outcome.backend.confirmation {
            self.ctx.warn(&format!(
                "The backend deployment was not confirmed yet; check {}",
                outcome.record.health_url
            ));
        }
        if !outcome.backend.failed_variables.is_empty() {
            self.ctx.warn(&format!(
                "Variables not set on the backend: {}",
                outcome.backend.failed_variables.join(", ")
            ));
        }
        if outcome.frontend.cors_updated {
            self.ctx
                .warn("Allow ~2 minutes for the backend to redeploy with the new CORS origin");
        }
        println!(
            "  {}  {}",
            "Open:".style(self.ctx.styles.dim),
            outcome.frontend.url.style(self.ctx.styles.url)
        );
    }

    /// Render readiness check results.
    pub fn render_check(&self, checks: &ReadinessChecks, issues: &[String]) {
        println!();
        println!("  {}", "Tandem Readiness Check".style(self.ctx.styles.header));
        println!();

        println!("  Tools:");
        for tool in &checks.tools {
            match &tool.version {
                Some(version) => self.print_check(true, &format!("{}: {version}", tool.name)),
                None => self.print_check(false, &format!("{} ({}) not found", tool.name, tool.binary)),
            }
        }
        println!();

        println!("  Sessions:");
        for session in &checks.sessions {
            match &session.user {
                Some(user) => self.print_check(true, &format!("{}: {user}", session.platform)),
                None => self.print_check(false, &format!("{}: not logged in", session.platform)),
            }
        }
        println!();

        if issues.is_empty() {
            println!(
                "  {} Ready to deploy.",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            println!(
                "  {} Found {} issues:",
                "\u{2717}".style(self.ctx.styles.error),
                issues.len()
            );
            for issue in issues {
                println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
            }
        }
        println!();
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn render_config(&self, config: &TandemConfig, path: &Path, exists: bool) -> Result<()> {
        let source = if exists { "" } else { ", not found: defaults" };
        println!();
        println!(
            "  {}",
            format!("Configuration ({}{source})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        let yaml = serde_yaml::to_string(config).context("cannot serialize config")?;
        for line in yaml.lines() {
            println!("  {line}");
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["TANDEM_CONFIG", "TANDEM_YES", "NO_COLOR", "RUST_LOG"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
        Ok(())
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}
