//! Application service — platform session check and login.

use crate::application::ports::{PlatformSession, ProgressReporter};
use crate::application::services::settle;

/// Logged-in identity, or `None` when the CLI is not authenticated.
///
/// Authenticated means `whoami` exited 0 and printed something; the text
/// itself is only used for display.
pub async fn session_user(platform: &impl PlatformSession) -> Option<String> {
    let output = settle(
        &format!("{} whoami", platform.cli()),
        platform.whoami().await,
    );
    output.stdout_text().map(str::to_owned)
}

/// Ensure the platform CLI is logged in, running the interactive login once
/// if needed.
///
/// Returns `false` when the second check still finds no session.
pub async fn ensure_session(
    platform: &impl PlatformSession,
    reporter: &impl ProgressReporter,
) -> bool {
    reporter.header(&format!("{} login", platform.platform()));

    if let Some(user) = session_user(platform).await {
        reporter.success(&format!("already logged in: {user}"));
        return true;
    }

    reporter.info("opening browser for login...");
    reporter.warn("finish the login in your browser, then come back here");
    let login = settle(
        &format!("{} login", platform.cli()),
        platform.login().await,
    );
    if !login.success() {
        tracing::debug!(platform = platform.platform(), "login command did not succeed");
    }

    if let Some(user) = session_user(platform).await {
        reporter.success(&format!("logged in: {user}"));
        return true;
    }

    reporter.error(&format!("{} login failed", platform.platform()));
    false
}
