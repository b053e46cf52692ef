pub mod defaults;

mod bias_config;
mod contradiction_config;
mod observability_config;
mod similarity_config;

pub use bias_config::{BiasConfig, PValueMethod};
pub use contradiction_config::ContradictionConfig;
pub use observability_config::ObservabilityConfig;
pub use similarity_config::SimilarityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to defaults when
/// omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbityConfig {
    pub similarity: SimilarityConfig,
    pub contradiction: ContradictionConfig,
    pub bias: BiasConfig,
    pub observability: ObservabilityConfig,
}

impl ProbityConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject any setting that would make analysis results meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.similarity.validate()?;
        self.contradiction.validate()?;
        self.bias.validate()?;
        Ok(())
    }
}
