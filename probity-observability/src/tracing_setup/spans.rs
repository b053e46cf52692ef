//! Span definitions per operation: detection, comparison, bias, attribution, calibration.

/// Create a contradiction detection span.
#[macro_export]
macro_rules! detection_span {
    ($case_id:expr, $claim_count:expr) => {
        tracing::info_span!("probity.detection", case_id = %$case_id, claim_count = $claim_count)
    };
}

/// Create a single pair comparison span.
#[macro_export]
macro_rules! comparison_span {
    ($claim_a:expr, $claim_b:expr) => {
        tracing::debug_span!("probity.comparison", claim_a = %$claim_a, claim_b = %$claim_b)
    };
}

/// Create a document bias analysis span.
#[macro_export]
macro_rules! bias_span {
    ($document_id:expr, $document_type:expr) => {
        tracing::info_span!(
            "probity.bias",
            document_id = %$document_id,
            document_type = %$document_type
        )
    };
}

/// Create an entity attribution span.
#[macro_export]
macro_rules! attribution_span {
    ($entity_id:expr, $claim_count:expr) => {
        tracing::info_span!(
            "probity.attribution",
            entity_id = %$entity_id,
            claim_count = $claim_count
        )
    };
}

/// Create a baseline calibration span.
#[macro_export]
macro_rules! calibration_span {
    ($document_type:expr, $metric:expr) => {
        tracing::info_span!(
            "probity.calibration",
            document_type = %$document_type,
            metric = %$metric
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DETECTION: &str = "probity.detection";
    pub const COMPARISON: &str = "probity.comparison";
    pub const BIAS: &str = "probity.bias";
    pub const ATTRIBUTION: &str = "probity.attribution";
    pub const CALIBRATION: &str = "probity.calibration";
}
