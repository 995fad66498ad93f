//! Environment variable sets pushed to the platforms.

use crate::domain::config::TandemConfig;
use crate::domain::url::BackendUrl;

/// Backend variable holding the CORS allow-list origin.
pub const FRONTEND_URL_KEY: &str = "FRONTEND_URL";

/// Backend variable holding the generated signing secret.
pub const SECRET_KEY: &str = "JWT_SECRET";

/// Ordered backend variable set: the fixed table first, then any extra
/// variables from configuration (sorted by key). Extra variables cannot
/// override a fixed key.
#[must_use]
pub fn backend_variables(config: &TandemConfig, secret: &str) -> Vec<(String, String)> {
    let b = &config.backend;
    let mut vars: Vec<(String, String)> = vec![
        ("NODE_ENV".into(), b.node_env.clone()),
        ("PORT".into(), b.port.to_string()),
        (SECRET_KEY.into(), secret.to_string()),
        ("JWT_EXPIRES_IN".into(), b.jwt_expires_in.clone()),
        ("RATE_LIMIT_WINDOW_MS".into(), b.rate_limit_window_ms.to_string()),
        ("RATE_LIMIT_MAX_REQUESTS".into(), b.rate_limit_max_requests.to_string()),
        ("LOG_LEVEL".into(), b.log_level.clone()),
        (FRONTEND_URL_KEY.into(), b.placeholder_frontend_url.clone()),
    ];
    for (key, value) in &b.variables {
        if !vars.iter().any(|(k, _)| k == key) {
            vars.push((key.clone(), value.clone()));
        }
    }
    vars
}

/// Contents of the frontend env file: one `KEY=<backend>/api` line.
#[must_use]
pub fn frontend_env_file(api_url_key: &str, backend: &BackendUrl) -> String {
    format!("{api_url_key}={}\n", backend.api_url())
}
