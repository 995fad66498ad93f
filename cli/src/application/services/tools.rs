//! Application service — CLI tool availability check.
//!
//! Queries each platform CLI for its version and installs the missing ones.
//! Installation is best effort: the result is reported, never verified.

use serde::Serialize;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::settle;

/// A platform CLI the deployment depends on.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec<'a> {
    /// Display name, e.g. `"Railway CLI"`.
    pub name: &'a str,
    /// Binary invoked with `--version`.
    pub binary: &'a str,
    /// Install command (program followed by arguments).
    pub install: &'a [String],
}

/// What the availability check found or did for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolReport {
    Present { name: String, version: String },
    Installed { name: String },
    InstallFailed { name: String, reason: String },
}

/// Return the tool's version line, or `None` when it is not usable.
pub async fn probe_version(runner: &impl CommandRunner, binary: &str) -> Option<String> {
    let output = settle(
        &format!("{binary} --version"),
        runner.run(binary, &["--version"], None).await,
    );
    output
        .stdout_text()
        .and_then(|text| text.lines().next())
        .map(str::to_owned)
}

/// Make sure every tool is installed, installing missing ones.
///
/// Never fails: an installer that cannot run or exits non-zero is reported
/// as `InstallFailed` and the caller carries on.
pub async fn ensure_tools(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    tools: &[ToolSpec<'_>],
) -> Vec<ToolReport> {
    reporter.step("checking installed CLIs...");
    let mut reports = Vec::with_capacity(tools.len());
    for tool in tools {
        let report = match probe_version(runner, tool.binary).await {
            Some(version) => {
                reporter.success(&format!("{}: {version}", tool.name));
                ToolReport::Present {
                    name: tool.name.to_owned(),
                    version,
                }
            }
            None => {
                reporter.warn(&format!("{} not installed", tool.name));
                install(runner, reporter, tool).await
            }
        };
        reports.push(report);
    }
    reports
}

async fn install(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    tool: &ToolSpec<'_>,
) -> ToolReport {
    let name = tool.name.to_owned();
    let Some((program, args)) = tool.install.split_first() else {
        reporter.warn(&format!("no install command configured for {name}"));
        return ToolReport::InstallFailed {
            name,
            reason: "no install command configured".to_string(),
        };
    };

    reporter.step(&format!("installing {name}: {}", tool.install.join(" ")));
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = settle(
        &tool.install.join(" "),
        runner.run_interactive(program, &arg_refs, None).await,
    );
    if output.success() {
        reporter.success(&format!("{name} installed"));
        ToolReport::Installed { name }
    } else {
        let reason = output.failure_summary();
        reporter.warn(&format!("installing {name} failed ({reason}), continuing"));
        ToolReport::InstallFailed { name, reason }
    }
}

/// The two platform CLIs named in the configuration.
pub fn platform_tools<'a>(
    config: &'a crate::domain::TandemConfig,
    backend: &'a impl crate::application::ports::PlatformSession,
    frontend: &'a impl crate::application::ports::PlatformSession,
) -> [ToolSpec<'a>; 2] {
    [
        ToolSpec {
            name: backend.platform(),
            binary: &config.backend.cli,
            install: &config.backend.install,
        },
        ToolSpec {
            name: frontend.platform(),
            binary: &config.frontend.cli,
            install: &config.frontend.install,
        },
    ]
}
