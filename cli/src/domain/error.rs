//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator. Callers that need to branch on a failure (exit code,
//! cancellation message) use `anyhow::Error::downcast_ref`.

use thiserror::Error;

use crate::domain::deployment::Tier;

// ── Deployment errors ─────────────────────────────────────────────────────────

/// Fatal outcomes of a deployment run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeployError {
    #[error("Not logged in to {platform}. Run '{cli} login' and try again.")]
    AuthFailed { platform: String, cli: String },

    #[error("Could not determine the {tier} URL. Deploy manually and re-run with the URL at hand.")]
    UrlUnavailable { tier: Tier },

    #[error("{platform} reported a failed deployment: {detail}")]
    DeploymentFailed { platform: String, detail: String },

    #[error("Deployment cancelled by user")]
    Cancelled,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating `tandem.yaml`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: must not be empty")]
    Empty { key: &'static str },

    #[error("Invalid value for backend.port: 0 is not a valid port")]
    ZeroPort,

    #[error("Invalid value for deploy.poll_interval_secs: must be greater than 0")]
    ZeroPollInterval,

    #[error(
        "Invalid value for deploy.timeout_secs: {timeout}s is shorter than the poll interval ({interval}s)"
    )]
    TimeoutBelowInterval { timeout: u64, interval: u64 },
}
