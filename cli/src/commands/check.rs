//! `tandem check` — report CLI versions and platform logins.
//!
//! Read-only. Issues are reported but do not change the exit code; `deploy`
//! remediates missing tools and logins itself.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::check::run_check;
use crate::application::services::tools::platform_tools;
use crate::domain::collect_issues;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::railway::RailwayCli;
use crate::infra::vercel::VercelCli;
use crate::output::{OutputContext, TerminalReporter, progress};

/// Run the check command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or rendering fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let config = app.load_config()?;
    let runner = TokioCommandRunner::new(config.deploy.command_timeout());
    let backend = RailwayCli::new(&runner, &config.backend);
    let frontend = VercelCli::new(&runner, &config.frontend);
    let tools = platform_tools(&config, &backend, &frontend);

    let pb = progress::spinner_if(app.output.show_progress(), "Checking platforms...");
    // Step lines would interleave with the spinner.
    let quiet = OutputContext::new(true, true);
    let reporter = if pb.is_hidden() {
        app.terminal_reporter()
    } else {
        TerminalReporter::new(&quiet)
    };
    let checks = run_check(&runner, &reporter, &tools, &backend, &frontend).await;
    progress::finish_clear(&pb);

    let issues = collect_issues(&checks);
    app.renderer().render_check(&checks, &issues)
}
