//! Domain types and validators for Tandem configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `tandem.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TandemConfig {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub frontend: FrontendConfig,
    pub deploy: DeployConfig,
    pub record: RecordConfig,
}

/// Application identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Short name; used for the backend project name and the secret prefix.
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "tandem-app".to_string(),
        }
    }
}

/// Backend platform (Railway) settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend project directory, relative to the working directory.
    pub dir: PathBuf,
    /// Platform CLI binary.
    pub cli: String,
    /// Command used when the CLI is missing.
    pub install: Vec<String>,
    /// Project name used by `init`. Defaults to `<app.name>-backend`.
    pub project: Option<String>,
    /// Managed database add-on.
    pub database: String,
    pub node_env: String,
    pub port: u16,
    pub jwt_expires_in: String,
    pub rate_limit_window_ms: u64,
    pub rate_limit_max_requests: u32,
    pub log_level: String,
    /// `FRONTEND_URL` value used until the real frontend URL is known.
    pub placeholder_frontend_url: String,
    /// Additional variables pushed after the fixed set.
    pub variables: BTreeMap<String, String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("backend"),
            cli: "railway".to_string(),
            install: to_args(&["npm", "install", "-g", "@railway/cli"]),
            project: None,
            database: "mysql".to_string(),
            node_env: "production".to_string(),
            port: 5000,
            jwt_expires_in: "7d".to_string(),
            rate_limit_window_ms: 900_000,
            rate_limit_max_requests: 100,
            log_level: "info".to_string(),
            placeholder_frontend_url: "https://temporary.vercel.app".to_string(),
            variables: BTreeMap::new(),
        }
    }
}

/// Frontend platform (Vercel) settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrontendConfig {
    pub dir: PathBuf,
    pub cli: String,
    pub install: Vec<String>,
    /// Env file written into `dir` before deploying.
    pub env_file: String,
    /// Key holding the backend API base URL.
    pub api_url_key: String,
    /// Domain suffix that identifies the production URL in deploy output.
    pub domain_suffix: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("frontend"),
            cli: "vercel".to_string(),
            install: to_args(&["npm", "install", "-g", "vercel"]),
            env_file: ".env.production".to_string(),
            api_url_key: "VITE_API_URL".to_string(),
            domain_suffix: "vercel.app".to_string(),
        }
    }
}

/// Deployment timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeployConfig {
    /// Delay between backend status polls.
    pub poll_interval_secs: u64,
    /// Give up waiting for a terminal backend status after this long.
    pub timeout_secs: u64,
    /// Kill any captured platform command running longer than this.
    pub command_timeout_secs: u64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5,
            timeout_secs: 120,
            command_timeout_secs: 600,
        }
    }
}

impl DeployConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    /// Number of status polls that fit in the timeout (at least one).
    #[must_use]
    pub fn max_polls(&self) -> u32 {
        let polls = self.timeout_secs / self.poll_interval_secs.max(1);
        u32::try_from(polls).unwrap_or(u32::MAX).max(1)
    }
}

/// Deployment record contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordConfig {
    pub path: PathBuf,
    pub admin_email: String,
    pub admin_password: String,
    pub backend_dashboard: String,
    pub frontend_dashboard: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("DEPLOY-INFO.txt"),
            admin_email: "admin@example.com".to_string(),
            admin_password: "admin123".to_string(),
            backend_dashboard: "https://railway.app".to_string(),
            frontend_dashboard: "https://vercel.com/dashboard".to_string(),
        }
    }
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

impl TandemConfig {
    /// Backend project name (`backend.project` or `<app.name>-backend`).
    #[must_use]
    pub fn project_name(&self) -> String {
        self.backend
            .project
            .clone()
            .unwrap_or_else(|| format!("{}-backend", self.app.name))
    }

    /// Prefix of the generated backend secret.
    #[must_use]
    pub fn secret_prefix(&self) -> String {
        format!("{}-", self.app.name)
    }

    /// Check the configuration for values the deployment cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required: [(&'static str, bool); 7] = [
            ("app.name", self.app.name.trim().is_empty()),
            ("backend.cli", self.backend.cli.trim().is_empty()),
            ("backend.dir", self.backend.dir.as_os_str().is_empty()),
            ("frontend.cli", self.frontend.cli.trim().is_empty()),
            ("frontend.dir", self.frontend.dir.as_os_str().is_empty()),
            ("frontend.env_file", self.frontend.env_file.trim().is_empty()),
            ("frontend.domain_suffix", self.frontend.domain_suffix.trim().is_empty()),
        ];
        if let Some((key, _)) = required.into_iter().find(|&(_, empty)| empty) {
            return Err(ConfigError::Empty { key });
        }
        if self.backend.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.deploy.poll_interval_secs == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.deploy.timeout_secs < self.deploy.poll_interval_secs {
            return Err(ConfigError::TimeoutBelowInterval {
                timeout: self.deploy.timeout_secs,
                interval: self.deploy.poll_interval_secs,
            });
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
