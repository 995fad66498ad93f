//! Opens URLs in the operator's default browser.

use anyhow::{Context, Result};

/// Ask the OS to open `url`.
///
/// # Errors
///
/// Returns an error if no browser launcher is available.
pub fn open_url(url: &str) -> Result<()> {
    open::that(url).with_context(|| format!("opening {url} in the browser"))
}
