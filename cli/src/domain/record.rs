//! Deployment record — the human-readable summary written after a run.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::config::TandemConfig;
use crate::domain::url::{BackendUrl, FrontendUrl};

/// Everything the summary file shows. Built once per run, never read back.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRecord {
    pub app: String,
    pub deployed_at: DateTime<Local>,
    pub backend_url: BackendUrl,
    pub api_url: String,
    pub health_url: String,
    pub frontend_url: FrontendUrl,
    pub admin_email: String,
    pub admin_password: String,
    pub backend_dashboard: String,
    pub frontend_dashboard: String,
}

impl DeploymentRecord {
    #[must_use]
    pub fn new(
        config: &TandemConfig,
        backend: &BackendUrl,
        frontend: &FrontendUrl,
        deployed_at: DateTime<Local>,
    ) -> Self {
        Self {
            app: config.app.name.clone(),
            deployed_at,
            backend_url: backend.clone(),
            api_url: backend.api_url(),
            health_url: backend.health_url(),
            frontend_url: frontend.clone(),
            admin_email: config.record.admin_email.clone(),
            admin_password: config.record.admin_password.clone(),
            backend_dashboard: config.record.backend_dashboard.clone(),
            frontend_dashboard: config.record.frontend_dashboard.clone(),
        }
    }

    /// Render the fixed text template.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "\n=== DEPLOYMENT: {app} ===\n\
             Date: {date}\n\
             \n\
             Frontend: {frontend}\n\
             Backend: {api}\n\
             Health Check: {health}\n\
             \n\
             Login:\n  \
               Email: {email}\n  \
               Password: {password}\n\
             \n\
             Administration:\n  \
               Backend: {backend_dash}\n  \
               Frontend: {frontend_dash}\n",
            app = self.app,
            date = self.deployed_at.format("%Y-%m-%d %H:%M:%S"),
            frontend = self.frontend_url,
            api = self.api_url,
            health = self.health_url,
            email = self.admin_email,
            password = self.admin_password,
            backend_dash = self.backend_dashboard,
            frontend_dash = self.frontend_dashboard,
        )
    }
}
