use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid highlight configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Host-facing settings for occurrence highlighting.
///
/// Every key is optional, so an empty document yields [`HighlightConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// When `false`, the finder computes nothing and publishes an empty result.
    pub enabled: bool,
    /// Scheduling priority reported to the host.
    pub priority: u32,
}

const fn default_priority() -> u32 {
    20
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: default_priority(),
        }
    }
}

impl HighlightConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| {
            tracing::error!("Failed to parse highlight configuration: {}", e);
            e
        })?;
        Ok(config)
    }
}
