//! Application service — backend deployment use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::application::ports::{BackendPlatform, OperatorPrompt, ProgressReporter};
use crate::application::services::settle;
use crate::domain::deployment::{DeployConfirmation, DeploymentStatus, parse_deployment_status};
use crate::domain::secret::generate_secret;
use crate::domain::url::{BackendUrl, normalize_backend_url};
use crate::domain::variables::backend_variables;
use crate::domain::{DeployError, TandemConfig, Tier};

/// Outcome of the backend deployment.
#[derive(Debug, Clone, Serialize)]
pub struct BackendDeployment {
    pub url: BackendUrl,
    /// `true` when the directory was not linked and a project was created.
    pub project_created: bool,
    /// Variables whose set command failed. No rollback is attempted.
    pub failed_variables: Vec<String>,
    pub confirmation: DeployConfirmation,
}

/// Deploy the backend and return its public URL.
///
/// Steps run in order and are best effort: a failed link check leads to
/// project creation, failed variable sets are reported, and a missing
/// domain falls back to asking the operator.
///
/// # Errors
///
/// Returns [`DeployError::DeploymentFailed`] when the platform reports a
/// failed deployment, and [`DeployError::UrlUnavailable`] when no URL can
/// be obtained from the platform or the operator.
pub async fn deploy_backend(
    platform: &impl BackendPlatform,
    prompt: &impl OperatorPrompt,
    reporter: &impl ProgressReporter,
    config: &TandemConfig,
) -> Result<BackendDeployment> {
    reporter.header(&format!("Deploy backend ({})", platform.platform()));
    let cli = platform.cli();

    reporter.step("[1/5] checking project link...");
    let project_created = ensure_project(platform, reporter, &config.project_name()).await;

    reporter.step(&format!("[2/5] adding {} database...", config.backend.database));
    let db = settle(
        &format!("{cli} add --database"),
        platform.add_database(&config.backend.database).await,
    );
    if db.success() {
        reporter.success("database requested");
    } else {
        reporter.warn(&format!("database request failed ({})", db.failure_summary()));
    }

    reporter.step("[3/5] setting environment variables...");
    let secret = generate_secret(&config.secret_prefix());
    let variables = backend_variables(config, &secret);
    let failed_variables = set_variables(platform, reporter, &variables).await;

    reporter.step("[4/5] deploying backend...");
    let up = settle(&format!("{cli} up --detach"), platform.deploy_detached().await);
    if !up.success() {
        reporter.warn(&format!("deploy command failed ({})", up.failure_summary()));
    }

    reporter.step("waiting for the deployment to finish...");
    let confirmation = wait_for_deployment(
        platform,
        config.deploy.poll_interval(),
        config.deploy.max_polls(),
    )
    .await;
    match &confirmation {
        DeployConfirmation::Confirmed { .. } => reporter.success("deployment confirmed"),
        DeployConfirmation::NotConfirmed { attempts } => reporter.warn(&format!(
            "deployment not yet confirmed after {attempts} checks, continuing"
        )),
        DeployConfirmation::Failed { detail, .. } => {
            return Err(DeployError::DeploymentFailed {
                platform: platform.platform().to_owned(),
                detail: detail.clone(),
            }
            .into());
        }
    }

    reporter.step("[5/5] resolving backend URL...");
    let url = resolve_backend_url(platform, prompt, reporter).await?;
    reporter.success(&format!("backend deployed: {url}"));

    Ok(BackendDeployment {
        url,
        project_created,
        failed_variables,
        confirmation,
    })
}

/// Link check; creates the project when the directory is not linked.
async fn ensure_project(
    platform: &impl BackendPlatform,
    reporter: &impl ProgressReporter,
    project: &str,
) -> bool {
    let cli = platform.cli();
    let status = settle(&format!("{cli} status"), platform.link_status().await);
    if status.success() {
        reporter.success("project already linked");
        return false;
    }

    reporter.info(&format!("creating project '{project}'..."));
    let init = settle(
        &format!("{cli} init --name {project}"),
        platform.create_project(project).await,
    );
    if init.success() {
        reporter.success(&format!("project '{project}' created"));
    } else {
        reporter.warn(&format!("project creation failed ({})", init.failure_summary()));
    }
    true
}

/// Push each variable independently. Returns the keys that failed.
async fn set_variables(
    platform: &impl BackendPlatform,
    reporter: &impl ProgressReporter,
    variables: &[(String, String)],
) -> Vec<String> {
    let mut failed = Vec::new();
    for (key, value) in variables {
        let output = settle(
            &format!("{} variables --set {key}", platform.cli()),
            platform.set_variable(key, value).await,
        );
        if output.success() {
            reporter.success(&format!("{key} set"));
        } else {
            reporter.warn(&format!("{key} not set ({})", output.failure_summary()));
            failed.push(key.clone());
        }
    }
    failed
}

/// Poll the deployment status until it is terminal or `max_polls` checks
/// have been made, sleeping `interval` before each check.
pub async fn wait_for_deployment(
    platform: &impl BackendPlatform,
    interval: Duration,
    max_polls: u32,
) -> DeployConfirmation {
    for attempt in 1..=max_polls {
        tokio::time::sleep(interval).await;
        let output = settle(
            &format!("{} service status --json", platform.cli()),
            platform.deployment_status().await,
        );
        if !output.success() {
            continue;
        }
        let status = parse_deployment_status(&output.stdout);
        tracing::debug!(attempt, ?status, "deployment status");
        match status {
            DeploymentStatus::Succeeded => {
                return DeployConfirmation::Confirmed { attempts: attempt };
            }
            DeploymentStatus::Failed => {
                return DeployConfirmation::Failed {
                    attempts: attempt,
                    detail: format!("run '{} logs' for details", platform.cli()),
                };
            }
            DeploymentStatus::InProgress | DeploymentStatus::Unknown => {}
        }
    }
    DeployConfirmation::NotConfirmed {
        attempts: max_polls,
    }
}

/// Query the platform domain; fall back to the operator.
///
/// # Errors
///
/// Returns [`DeployError::UrlUnavailable`] when neither source yields a URL,
/// or an error if the prompt itself fails.
pub async fn resolve_backend_url(
    platform: &impl BackendPlatform,
    prompt: &impl OperatorPrompt,
    reporter: &impl ProgressReporter,
) -> Result<BackendUrl> {
    let output = settle(&format!("{} domain", platform.cli()), platform.domain().await);
    if let Some(url) = output.stdout_text().and_then(normalize_backend_url) {
        return Ok(url);
    }

    reporter.warn("could not determine the backend URL automatically");
    let answer = prompt.ask_url("Backend URL").await?;
    answer
        .as_deref()
        .and_then(normalize_backend_url)
        .ok_or_else(|| {
            DeployError::UrlUnavailable {
                tier: Tier::Backend,
            }
            .into()
        })
}
