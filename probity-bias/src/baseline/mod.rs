//! Baseline corpus: storage, estimated seed figures, calibration.

pub mod calibration;
pub mod seed;
pub mod store;

pub use calibration::{calibrate, calibrate_from_documents};
pub use seed::default_baselines;
pub use store::InMemoryBaselineStore;

use probity_core::models::{BiasBaseline, BiasMetric};
use probity_core::traits::IBaselineStore;

/// Look up the baseline for a document type, then for the fallback type.
pub fn resolve_baseline(
    store: &dyn IBaselineStore,
    document_type: &str,
    metric: BiasMetric,
    fallback_document_type: Option<&str>,
) -> Option<BiasBaseline> {
    store.get_baseline(document_type, metric).or_else(|| {
        fallback_document_type
            .filter(|fallback| *fallback != document_type)
            .and_then(|fallback| store.get_baseline(fallback, metric))
    })
}
