pub mod config;
pub mod replay;
pub mod resolve;
pub mod sections;

use std::path::Path;

use anyhow::{Context, Result};
use folio_core::config::FolioConfig;

/// Load and validate a config file, or fall back to the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    let Some(path) = path else {
        return Ok(FolioConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: FolioConfig = toml::from_str(&contents)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
