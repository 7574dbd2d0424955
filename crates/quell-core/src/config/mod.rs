pub mod defaults;
mod observability_config;
mod suppression_config;

pub use observability_config::ObservabilityConfig;
pub use suppression_config::{target_fraction_from, SuppressionConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, QuellResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuellConfig {
    pub suppression: SuppressionConfig,
    pub observability: ObservabilityConfig,
}

impl QuellConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> QuellResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> QuellResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.suppression.validate()
    }
}
