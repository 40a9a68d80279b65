pub mod config;
pub mod locate;
pub mod track;

use std::path::Path;

use anyhow::{Context, Result};
use ballseek_core::pipeline::config::VisionConfig;

/// Read a TOML config, or fall back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<VisionConfig> {
    let Some(path) = path else {
        return Ok(VisionConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
}
