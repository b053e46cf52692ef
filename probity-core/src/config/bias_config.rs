use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How two-tailed p-values are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    /// Distribution CDF via `statrs`.
    Exact,
    /// Fixed critical-value table at the 0.10 / 0.05 / 0.01 levels.
    Table,
}

/// Bias engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasConfig {
    /// |z| at or above which a signal is emitted.
    pub z_warning_threshold: f64,
    /// |z| at or above which a signal is HIGH severity.
    pub z_critical_threshold: f64,
    /// Minimum 2x2 table total for the chi-square test.
    pub min_sample_size: usize,
    /// p-value must be strictly below this.
    pub significance_level: f64,
    /// Cramér's V must be strictly above this.
    pub min_effect_size: f64,
    pub p_value_method: PValueMethod,
    /// Document type consulted when no baseline exists for the requested one.
    pub fallback_document_type: Option<String>,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            z_warning_threshold: defaults::DEFAULT_Z_WARNING,
            z_critical_threshold: defaults::DEFAULT_Z_CRITICAL,
            min_sample_size: defaults::DEFAULT_MIN_SAMPLE_SIZE,
            significance_level: defaults::DEFAULT_SIGNIFICANCE_LEVEL,
            min_effect_size: defaults::DEFAULT_MIN_EFFECT_SIZE,
            p_value_method: PValueMethod::Exact,
            fallback_document_type: Some(defaults::DEFAULT_FALLBACK_DOCUMENT_TYPE.to_string()),
        }
    }
}

impl BiasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("bias.z_warning_threshold", self.z_warning_threshold)?;
        ConfigError::check_positive("bias.z_critical_threshold", self.z_critical_threshold)?;
        if self.z_warning_threshold > self.z_critical_threshold {
            return Err(ConfigError::InvertedThresholds {
                warning: self.z_warning_threshold,
                critical: self.z_critical_threshold,
            });
        }
        if self.min_sample_size < 1 {
            return Err(ConfigError::BelowMinimum {
                name: "bias.min_sample_size".to_string(),
                min: 1,
                value: self.min_sample_size,
            });
        }
        ConfigError::check_unit("bias.significance_level", self.significance_level)?;
        ConfigError::check_unit("bias.min_effect_size", self.min_effect_size)?;
        Ok(())
    }
}
