//! Configuration traits and file loading

use crate::{HearthError, HearthResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Trait for configuration validation
pub trait ConfigValidation {
    /// Validate this configuration
    fn validate(&self) -> HearthResult<()>;
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> HearthResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(HearthError::invalid("Unsupported file format")),
        }
    }
}

/// Parse and validate configuration from a string.
pub fn parse_config_str<T>(content: &str, format: ConfigFormat) -> HearthResult<T>
where
    T: DeserializeOwned + ConfigValidation,
{
    let config: T = match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| HearthError::invalid(format!("Invalid TOML: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| HearthError::invalid(format!("Invalid JSON: {e}")))?,
    };
    config.validate()?;
    Ok(config)
}

/// Load and validate configuration from a TOML or JSON file.
pub fn load_config_file<T>(path: &Path) -> HearthResult<T>
where
    T: DeserializeOwned + ConfigValidation,
{
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content, format)
}
