//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use probity_core::models::{BiasSignal, Contradiction, SimilarityStrategyKind};

/// Log a contradiction detection event.
pub fn contradiction_detected(contradiction: &Contradiction) {
    tracing::debug!(
        event = "contradiction_detected",
        case_id = %contradiction.case_id,
        claim_a = %contradiction.claim_a_id,
        claim_b = %contradiction.claim_b_id,
        contradiction_type = %contradiction.contradiction_type,
        severity = %contradiction.severity,
        method = %contradiction.detection_method.tag(),
        "contradiction detected"
    );
}

/// Log the end of a detection run.
pub fn detection_completed(case_id: &str, claims: usize, found: usize, critical: usize) {
    tracing::info!(
        event = "detection_completed",
        case_id = %case_id,
        claims = claims,
        found = found,
        critical = critical,
        "contradiction detection completed"
    );
}

/// Log an emitted bias signal.
pub fn bias_signal_emitted(signal: &BiasSignal) {
    tracing::info!(
        event = "bias_signal_emitted",
        case_id = %signal.case_id,
        document_id = ?signal.document_id,
        entity_id = ?signal.entity_id,
        signal_type = %signal.signal_type,
        z_score = signal.z_score,
        severity = %signal.severity,
        "bias signal emitted"
    );
}

/// Log a similarity fallback. Debug level: degradation is expected and
/// never an error.
pub fn similarity_degraded(unavailable: SimilarityStrategyKind, fallback: SimilarityStrategyKind) {
    tracing::debug!(
        event = "similarity_degraded",
        unavailable = %unavailable,
        fallback = %fallback,
        "similarity strategy fell back"
    );
}

/// Log a skipped comparison (insufficient data).
pub fn comparison_skipped(detector: &str, reason: &str) {
    tracing::trace!(
        event = "comparison_skipped",
        detector = %detector,
        reason = %reason,
        "comparison skipped"
    );
}

/// Log a baseline write.
pub fn baseline_upserted(document_type: &str, metric: &str, corpus_size: u32) {
    tracing::info!(
        event = "baseline_upserted",
        document_type = %document_type,
        metric = %metric,
        corpus_size = corpus_size,
        "baseline upserted"
    );
}
