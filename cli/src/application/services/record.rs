//! Application service — write the deployment record file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, ProgressReporter};
use crate::domain::DeploymentRecord;

/// Render the record and overwrite `path` with it. Returns the text.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_record(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    path: &Path,
    record: &DeploymentRecord,
) -> Result<String> {
    let text = record.render();
    fs.write(path, &text)
        .with_context(|| format!("writing {}", path.display()))?;
    reporter.success(&format!("deployment info saved to {}", path.display()));
    Ok(text)
}
