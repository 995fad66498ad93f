//! Application service — the full deployment run.
//!
//! Drives tool check → logins → backend → frontend → record in strict order.
//! Each stage's output is the next stage's input, so the ordering is carried
//! by values (`BackendUrl`, `FrontendUrl`) rather than by convention.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::application::ports::{
    BackendPlatform, CommandRunner, FrontendPlatform, LocalFs, OperatorPrompt, PlatformSession,
    ProgressReporter,
};
use crate::application::services::auth::ensure_session;
use crate::application::services::backend::{BackendDeployment, deploy_backend};
use crate::application::services::frontend::{FrontendDeployment, deploy_frontend};
use crate::application::services::record::save_record;
use crate::application::services::tools::{ToolReport, ensure_tools, platform_tools};
use crate::domain::{DeployError, DeploymentRecord, Stage, TandemConfig};

/// Ports the deployment run talks to.
pub struct DeployPorts<'a, C, B, F, P, L, R> {
    pub runner: &'a C,
    pub backend: &'a B,
    pub frontend: &'a F,
    pub prompt: &'a P,
    pub fs: &'a L,
    pub reporter: &'a R,
}

/// Everything a successful run produced.
#[derive(Debug, Serialize)]
pub struct DeployOutcome {
    pub stage: Stage,
    pub tools: Vec<ToolReport>,
    pub backend: BackendDeployment,
    pub frontend: FrontendDeployment,
    pub record: DeploymentRecord,
    pub record_path: PathBuf,
    #[serde(skip)]
    pub record_text: String,
}

/// Run the whole deployment.
///
/// # Errors
///
/// Returns [`DeployError::AuthFailed`] if either platform stays logged out
/// after one login attempt (no deployment step runs), and propagates the
/// fatal errors of the backend and frontend services.
pub async fn run_deploy<C, B, F, P, L, R>(
    ports: &DeployPorts<'_, C, B, F, P, L, R>,
    config: &TandemConfig,
) -> Result<DeployOutcome>
where
    C: CommandRunner,
    B: BackendPlatform,
    F: FrontendPlatform,
    P: OperatorPrompt,
    L: LocalFs,
    R: ProgressReporter,
{
    let DeployPorts {
        runner,
        backend,
        frontend,
        prompt,
        fs,
        reporter,
    } = *ports;
    let mut stage = Stage::Started;

    reporter.header("Tools");
    let tools = ensure_tools(runner, reporter, &platform_tools(config, backend, frontend)).await;
    stage = advance(stage);

    require_session(backend, reporter).await?;
    stage = advance(stage);
    require_session(frontend, reporter).await?;
    stage = advance(stage);

    let backend_deployment = deploy_backend(backend, prompt, reporter, config)
        .await
        .context("deploying backend")?;
    stage = advance(stage);

    let frontend_deployment = deploy_frontend(
        frontend,
        backend,
        fs,
        prompt,
        reporter,
        config,
        &backend_deployment.url,
    )
    .await
    .context("deploying frontend")?;
    stage = advance(stage);

    let record = DeploymentRecord::new(
        config,
        &backend_deployment.url,
        &frontend_deployment.url,
        Local::now(),
    );
    let record_text = save_record(fs, reporter, &config.record.path, &record)?;
    stage = advance(stage);

    Ok(DeployOutcome {
        stage: advance(stage),
        tools,
        backend: backend_deployment,
        frontend: frontend_deployment,
        record,
        record_path: config.record.path.clone(),
        record_text,
    })
}

async fn require_session(
    platform: &impl PlatformSession,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    if ensure_session(platform, reporter).await {
        Ok(())
    } else {
        Err(DeployError::AuthFailed {
            platform: platform.platform().to_owned(),
            cli: platform.cli().to_owned(),
        }
        .into())
    }
}

fn advance(stage: Stage) -> Stage {
    let next = stage.next();
    tracing::info!(stage = ?next, "stage reached");
    next
}
