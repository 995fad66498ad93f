//! Deployment stages and status classification.

use std::fmt;

use serde::Serialize;

/// Which half of the application a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Backend,
    Frontend,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
        })
    }
}

/// Progress of a deployment run. Each stage is a precondition for the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Started,
    ToolsChecked,
    BackendAuthenticated,
    FrontendAuthenticated,
    BackendDeployed,
    FrontendDeployed,
    RecordSaved,
    Done,
}

impl Stage {
    /// The stage that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Started => Self::ToolsChecked,
            Self::ToolsChecked => Self::BackendAuthenticated,
            Self::BackendAuthenticated => Self::FrontendAuthenticated,
            Self::FrontendAuthenticated => Self::BackendDeployed,
            Self::BackendDeployed => Self::FrontendDeployed,
            Self::FrontendDeployed => Self::RecordSaved,
            Self::RecordSaved | Self::Done => Self::Done,
        }
    }
}

/// Latest deployment status as reported by the backend platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStatus {
    Succeeded,
    Failed,
    InProgress,
    Unknown,
}

const SUCCEEDED_TOKENS: &[&str] = &["SUCCESS", "SUCCEEDED", "DEPLOYED"];
const FAILED_TOKENS: &[&str] = &["FAILED", "CRASHED", "ERROR"];
const IN_PROGRESS_TOKENS: &[&str] = &[
    "QUEUED",
    "INITIALIZING",
    "WAITING",
    "BUILDING",
    "DEPLOYING",
];

/// Extract the deployment status from status-command output.
///
/// Scans identifier-like tokens in order and returns the classification of
/// the first known upper-case status word, so `{"status":"BUILDING"}` and
/// `Deployment: SUCCESS` both work. Anything else is `Unknown`.
#[must_use]
pub fn parse_deployment_status(text: &str) -> DeploymentStatus {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .find_map(|token| {
            if SUCCEEDED_TOKENS.contains(&token) {
                Some(DeploymentStatus::Succeeded)
            } else if FAILED_TOKENS.contains(&token) {
                Some(DeploymentStatus::Failed)
            } else if IN_PROGRESS_TOKENS.contains(&token) {
                Some(DeploymentStatus::InProgress)
            } else {
                None
            }
        })
        .unwrap_or(DeploymentStatus::Unknown)
}

/// Result of waiting for the backend deployment to settle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeployConfirmation {
    /// The platform reported a successful deployment.
    Confirmed { attempts: u32 },
    /// The timeout elapsed without a terminal status.
    NotConfirmed { attempts: u32 },
    /// The platform reported a failed deployment.
    Failed { attempts: u32, detail: String },
}
