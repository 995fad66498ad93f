//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! to stdout; failures use the error object from [`format_error`].

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::services::deploy::DeployOutcome;
use crate::domain::{ReadinessChecks, TandemConfig};

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_deploy(&self, outcome: &DeployOutcome) -> Result<()> {
        print_json(&serde_json::to_value(outcome).context("serializing deploy outcome")?)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_check(&self, checks: &ReadinessChecks, issues: &[String]) -> Result<()> {
        print_json(&serde_json::json!({
            "ready": issues.is_empty(),
            "checks": checks,
            "issues": issues,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &TandemConfig, path: &Path, exists: bool) -> Result<()> {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "exists": exists,
            "config": config,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_json(&serde_json::json!({ "version": version }))
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
