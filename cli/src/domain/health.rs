//! Readiness checks shown by `tandem check`.
//!
//! Pure data types and issue collection — no I/O.

use serde::Serialize;

/// A platform CLI and the version it reported, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    pub name: String,
    pub binary: String,
    pub version: Option<String>,
}

/// Login state of one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCheck {
    pub platform: String,
    pub cli: String,
    pub user: Option<String>,
}

/// Everything `tandem check` probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessChecks {
    pub tools: Vec<ToolCheck>,
    pub sessions: Vec<SessionCheck>,
}

/// Human-readable list of problems that would stop or slow a deployment.
#[must_use]
pub fn collect_issues(checks: &ReadinessChecks) -> Vec<String> {
    let tools = checks
        .tools
        .iter()
        .filter(|t| t.version.is_none())
        .map(|t| format!("{} not found ('{}' is installed on deploy)", t.name, t.binary));
    let sessions = checks
        .sessions
        .iter()
        .filter(|s| s.user.is_none())
        .map(|s| format!("not logged in to {} (run: {} login)", s.platform, s.cli));
    tools.chain(sessions).collect()
}
