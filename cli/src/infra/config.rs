//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::TandemConfig;

/// Default configuration file, looked up in the current directory.
pub const CONFIG_FILE: &str = "tandem.yaml";

/// Production implementation of `ConfigStore` that reads a YAML file.
///
/// Lookup order: explicit path (`--config`), `TANDEM_CONFIG`, `./tandem.yaml`.
#[derive(Default)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<TandemConfig> {
        let path = self.path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(TandemConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> PathBuf {
        if let Some(path) = &self.explicit {
            return path.clone();
        }
        if let Ok(val) = std::env::var("TANDEM_CONFIG") {
            return PathBuf::from(val);
        }
        PathBuf::from(CONFIG_FILE)
    }
}
