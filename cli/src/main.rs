//! Tandem CLI - deploy a backend and its frontend as one unit

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tandem_cli::cli::Cli;
use tandem_cli::domain::DeployError;
use tandem_cli::output::json::format_error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    if let Err(e) = cli.run().await {
        report(&e, json);
        std::process::exit(1);
    }
}

fn report(e: &anyhow::Error, json: bool) {
    let (message, code) = match e.downcast_ref::<DeployError>() {
        Some(err) => (err.to_string(), error_code(err)),
        None => (format!("{e:?}"), "error"),
    };
    if json {
        match format_error(&message, code) {
            Ok(doc) => println!("{doc}"),
            Err(_) => eprintln!("Error: {message}"),
        }
    } else {
        eprintln!("Error: {message}");
    }
}

fn error_code(err: &DeployError) -> &'static str {
    match err {
        DeployError::AuthFailed { .. } => "auth_failed",
        DeployError::UrlUnavailable { .. } => "url_unavailable",
        DeployError::DeploymentFailed { .. } => "deployment_failed",
        DeployError::Cancelled => "cancelled",
    }
}
