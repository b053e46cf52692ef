/// Probity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept when reporting z-scores.
pub const Z_SCORE_PRECISION: i32 = 9;

/// Two-tailed critical |z| values for the 0.10 / 0.05 / 0.01 levels.
pub const Z_CRITICAL_P10: f64 = 1.645;
pub const Z_CRITICAL_P05: f64 = 1.96;
pub const Z_CRITICAL_P01: f64 = 2.576;

/// Chi-square (1 df) critical values for the 0.10 / 0.05 / 0.01 levels.
pub const CHI2_CRITICAL_P10: f64 = 2.706;
pub const CHI2_CRITICAL_P05: f64 = 3.841;
pub const CHI2_CRITICAL_P01: f64 = 6.635;

/// Confidence assigned to an explicit-negation polarity match.
pub const NEGATION_CONFIDENCE: f64 = 0.9;

/// Confidence assigned to a curated antonym/opposite-phrase match.
pub const ANTONYM_CONFIDENCE: f64 = 0.85;

/// Confidence assigned when claim metadata (polarity or denied modality)
/// marks two claims as opposed.
pub const STRUCTURED_OPPOSITION_CONFIDENCE: f64 = 0.8;

/// Document type used when no baseline exists for the requested type.
pub const GENERAL_DOCUMENT_TYPE: &str = "general";
