//! Application service — frontend deployment and CORS wiring.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{
    BackendPlatform, FrontendPlatform, LocalFs, OperatorPrompt, ProgressReporter,
};
use crate::application::services::settle;
use crate::domain::url::{BackendUrl, FrontendUrl, extract_frontend_url};
use crate::domain::variables::{FRONTEND_URL_KEY, frontend_env_file};
use crate::domain::{DeployError, TandemConfig, Tier};

/// Outcome of the frontend deployment.
#[derive(Debug, Clone, Serialize)]
pub struct FrontendDeployment {
    pub url: FrontendUrl,
    /// `false` when pushing the URL to the backend's allow-list failed.
    pub cors_updated: bool,
}

/// Deploy the frontend against an already deployed backend.
///
/// Taking `&BackendUrl` makes "backend first" a compile-time precondition.
///
/// # Errors
///
/// Returns an error if the env file cannot be written, the prompt fails, or
/// [`DeployError::UrlUnavailable`] when no frontend URL can be determined.
pub async fn deploy_frontend(
    frontend: &impl FrontendPlatform,
    backend: &impl BackendPlatform,
    fs: &impl LocalFs,
    prompt: &impl OperatorPrompt,
    reporter: &impl ProgressReporter,
    config: &TandemConfig,
    backend_url: &BackendUrl,
) -> Result<FrontendDeployment> {
    reporter.header(&format!("Deploy frontend ({})", frontend.platform()));

    let env_path = config.frontend.dir.join(&config.frontend.env_file);
    reporter.step(&format!("[1/3] writing {}...", config.frontend.env_file));
    let env = frontend_env_file(&config.frontend.api_url_key, backend_url);
    fs.write(&env_path, &env)
        .with_context(|| format!("writing {}", env_path.display()))?;
    reporter.success(env.trim_end());

    reporter.step(&format!("[2/3] deploying to {}...", frontend.platform()));
    let output = settle(
        &format!("{} --prod --yes", frontend.cli()),
        frontend.deploy_production().await,
    );
    if !output.success() {
        reporter.warn(&format!("deploy command failed ({})", output.failure_summary()));
    }

    let url = match extract_frontend_url(&output.combined(), &config.frontend.domain_suffix) {
        Some(url) => url,
        None => {
            reporter.warn("could not detect the frontend URL automatically");
            let answer = prompt.ask_url("Frontend URL").await?;
            answer
                .as_deref()
                .and_then(FrontendUrl::from_operator)
                .ok_or(DeployError::UrlUnavailable {
                    tier: Tier::Frontend,
                })?
        }
    };
    reporter.success(&format!("frontend deployed: {url}"));

    reporter.step("[3/3] updating backend CORS origin...");
    let cors_updated = update_cors(backend, reporter, &url).await;

    Ok(FrontendDeployment { url, cors_updated })
}

/// Push the frontend origin to the backend's allow-list variable.
pub async fn update_cors(
    backend: &impl BackendPlatform,
    reporter: &impl ProgressReporter,
    frontend_url: &FrontendUrl,
) -> bool {
    let output = settle(
        &format!("{} variables --set {FRONTEND_URL_KEY}", backend.cli()),
        backend
            .set_variable(FRONTEND_URL_KEY, frontend_url.as_str())
            .await,
    );
    if output.success() {
        reporter.success("CORS origin updated");
        true
    } else {
        reporter.warn(&format!(
            "CORS origin not updated ({}); set {FRONTEND_URL_KEY}={frontend_url} manually",
            output.failure_summary()
        ));
        false
    }
}
