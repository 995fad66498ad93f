//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod deployment;
pub mod error;
pub mod health;
pub mod record;
pub mod secret;
pub mod url;
pub mod variables;

pub use command::CommandOutput;
pub use config::TandemConfig;
pub use deployment::{DeployConfirmation, DeploymentStatus, Stage, Tier};
pub use error::{ConfigError, DeployError};
pub use health::{ReadinessChecks, SessionCheck, ToolCheck, collect_issues};
pub use record::DeploymentRecord;
pub use url::{BackendUrl, FrontendUrl};
