/// Configuration errors. Raised when config is loaded or built, never
/// at analysis time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold {name} must lie in [0, 1], got {value}")]
    ThresholdOutOfRange { name: String, value: f64 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: String, value: f64 },

    #[error("warning threshold {warning} exceeds critical threshold {critical}")]
    InvertedThresholds { warning: f64, critical: f64 },

    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum { name: String, min: usize, value: usize },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },
}

impl ConfigError {
    pub(crate) fn check_unit(name: &str, value: f64) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::ThresholdOutOfRange {
                name: name.to_string(),
                value,
            })
        }
    }

    pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive {
                name: name.to_string(),
                value,
            })
        }
    }
}
