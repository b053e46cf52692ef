// Single source of truth for all default values.

// --- Similarity ---
pub const DEFAULT_SIMILARITY_CACHE_ENABLED: bool = true;
pub const DEFAULT_SIMILARITY_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_FUZZY_MAX_CHARS: usize = 2_000;
pub const DEFAULT_NEGATION_OVERLAP: f64 = 0.75;

// --- Contradiction ---
pub const DEFAULT_SELF_SIMILARITY: f64 = 0.6;
pub const DEFAULT_SELF_OPPOSITION: f64 = 0.7;
pub const DEFAULT_MODALITY_SHIFT_SIMILARITY: f64 = 0.7;
pub const DEFAULT_TEMPORAL_SIMILARITY: f64 = 0.6;
pub const DEFAULT_VALUE_SIMILARITY: f64 = 0.5;
pub const DEFAULT_VALUE_RELATIVE_DIFFERENCE: f64 = 0.2;
pub const DEFAULT_ATTRIBUTION_SIMILARITY: f64 = 0.8;
pub const DEFAULT_DIRECT_SIMILARITY: f64 = 0.6;
pub const DEFAULT_DIRECT_OPPOSITION: f64 = 0.8;
pub const DEFAULT_QUOTATION_SIMILARITY: f64 = 0.6;
pub const DEFAULT_QUOTATION_MATCH: f64 = 0.6;
pub const DEFAULT_QUOTATION_FIDELITY: f64 = 0.95;
pub const DEFAULT_OMISSION_SIMILARITY: f64 = 0.6;
pub const DEFAULT_OMISSION_CONTAINMENT: f64 = 0.8;
pub const DEFAULT_TOPIC_BLOCKING: bool = false;
pub const DEFAULT_PARALLEL: bool = true;

// --- Bias ---
pub const DEFAULT_Z_WARNING: f64 = 1.5;
pub const DEFAULT_Z_CRITICAL: f64 = 2.0;
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;
pub const DEFAULT_MIN_EFFECT_SIZE: f64 = 0.1;
pub const DEFAULT_FALLBACK_DOCUMENT_TYPE: &str = "general";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
