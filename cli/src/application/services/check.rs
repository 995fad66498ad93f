//! Application service — readiness probe for `tandem check`.
//!
//! Read-only: nothing is installed and no login is started.

use crate::application::ports::{CommandRunner, PlatformSession, ProgressReporter};
use crate::application::services::auth::session_user;
use crate::application::services::tools::{ToolSpec, probe_version};
use crate::domain::{ReadinessChecks, SessionCheck, ToolCheck};

/// Probe tool versions and platform sessions.
pub async fn run_check(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    tools: &[ToolSpec<'_>],
    backend: &impl PlatformSession,
    frontend: &impl PlatformSession,
) -> ReadinessChecks {
    reporter.step("checking installed CLIs...");
    let mut tool_checks = Vec::with_capacity(tools.len());
    for tool in tools {
        tool_checks.push(ToolCheck {
            name: tool.name.to_owned(),
            binary: tool.binary.to_owned(),
            version: probe_version(runner, tool.binary).await,
        });
    }

    reporter.step("checking platform sessions...");
    let sessions = vec![session_check(backend).await, session_check(frontend).await];

    ReadinessChecks {
        tools: tool_checks,
        sessions,
    }
}

async fn session_check(platform: &impl PlatformSession) -> SessionCheck {
    SessionCheck {
        platform: platform.platform().to_owned(),
        cli: platform.cli().to_owned(),
        user: session_user(platform).await,
    }
}
