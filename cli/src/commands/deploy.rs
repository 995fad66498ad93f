//! `tandem deploy` — the full two-tier deployment.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::OperatorPrompt;
use crate::application::services::deploy::{DeployPorts, run_deploy};
use crate::domain::DeployError;
use crate::infra::browser;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::DiskFs;
use crate::infra::railway::RailwayCli;
use crate::infra::vercel::VercelCli;

/// Arguments for the deploy command.
#[derive(Args)]
pub struct DeployArgs {
    /// Do not offer to open the frontend in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Run the deploy command.
///
/// Ctrl-C at any point aborts the run with [`DeployError::Cancelled`]. Remote
/// state already created (project, variables, deployments) is left as is.
///
/// # Errors
///
/// Returns [`DeployError`] for authentication failures, cancellation, failed
/// deployments and missing URLs, and any other error with its context chain.
pub async fn run(app: &AppContext, args: &DeployArgs) -> Result<()> {
    let config = app.load_config()?;

    let runner = TokioCommandRunner::new(config.deploy.command_timeout())
        .interactive_stdout_to_stderr(app.is_json());
    let backend = RailwayCli::new(&runner, &config.backend);
    let frontend = VercelCli::new(&runner, &config.frontend);
    let prompt = app.prompt();
    let reporter = app.terminal_reporter();
    let ports = DeployPorts {
        runner: &runner,
        backend: &backend,
        frontend: &frontend,
        prompt: &prompt,
        fs: &DiskFs,
        reporter: &reporter,
    };

    let outcome = tokio::select! {
        result = run_deploy(&ports, &config) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, abandoning deployment");
            return Err(DeployError::Cancelled.into());
        }
    };

    app.renderer().render_deploy(&outcome)?;

    if args.no_open || app.non_interactive || app.is_json() {
        return Ok(());
    }
    let url = outcome.frontend.url.as_str();
    // The deployment is done; a cancelled question just means "no".
    let open = match prompt
        .confirm("Open the frontend in your browser?", false)
        .await
    {
        Ok(open) => open,
        Err(e) if matches!(e.downcast_ref::<DeployError>(), Some(DeployError::Cancelled)) => false,
        Err(e) => return Err(e),
    };
    if !open {
        return Ok(());
    }
    if let Err(e) = browser::open_url(url) {
        app.output.warn(&format!("{e:#}; open {url} manually"));
    }
    Ok(())
}
