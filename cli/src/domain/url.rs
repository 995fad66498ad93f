//! Backend/frontend URL newtypes and the text scans that produce them.
//!
//! `BackendUrl` and `FrontendUrl` have no public constructor taking an
//! arbitrary string: a value exists only after normalization or extraction
//! succeeded, which is what lets the services demand one as a precondition.

use std::fmt;

use serde::Serialize;

const HTTPS: &str = "https://";
const HTTP: &str = "http://";

/// Public URL of the deployed backend, always `https://<host>` without a
/// trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BackendUrl(String);

impl BackendUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base URL the frontend uses for API calls.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api", self.0)
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.0)
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public URL of the deployed frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontendUrl(String);

impl FrontendUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accept a URL typed by the operator. A missing scheme gets `https://`.
    #[must_use]
    pub fn from_operator(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }
        if input.contains("://") {
            Some(Self(input.to_string()))
        } else {
            Some(Self(format!("{HTTPS}{input}")))
        }
    }
}

impl fmt::Display for FrontendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize backend domain output (or operator input) to `https://<host>`.
///
/// Takes the last token of the last non-empty line, so decorated CLI output
/// such as `🚀 https://api.up.railway.app` works. Any number of leading
/// `https://`/`http://` prefixes and trailing slashes are dropped before
/// exactly one `https://` is added. Idempotent.
#[must_use]
pub fn normalize_backend_url(raw: &str) -> Option<BackendUrl> {
    let token = raw
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())?
        .split_whitespace()
        .last()?;

    let mut host = token;
    while let Some(rest) = host
        .strip_prefix(HTTPS)
        .or_else(|| host.strip_prefix(HTTP))
    {
        host = rest;
    }
    let host = host.trim_end_matches('/');
    if host.is_empty() {
        return None;
    }
    Some(BackendUrl(format!("{HTTPS}{host}")))
}

/// Find the frontend URL in captured deployment output.
///
/// The first line containing both `https://` and `domain_suffix` whose last
/// whitespace-separated token is an `https://` URL wins.
#[must_use]
pub fn extract_frontend_url(output: &str, domain_suffix: &str) -> Option<FrontendUrl> {
    output
        .lines()
        .filter(|line| line.contains(HTTPS) && line.contains(domain_suffix))
        .filter_map(|line| line.split_whitespace().last())
        .find(|token| token.starts_with(HTTPS))
        .map(|token| FrontendUrl(token.to_string()))
}
