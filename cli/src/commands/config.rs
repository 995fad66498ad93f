//! `tandem config` — show the effective configuration.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file values over defaults)
    Show,
    /// Print the configuration file location
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or rendered.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Path => show_path(app),
    }
}

fn show_config(app: &AppContext) -> Result<()> {
    let config = app.load_config()?;
    let path = app.config_store.path();
    app.renderer().render_config(&config, &path, path.exists())
}

fn show_path(app: &AppContext) -> Result<()> {
    let path = app.config_store.path();
    if app.is_json() {
        let out = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
