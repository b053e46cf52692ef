use crate::errors::ProbityResult;
use crate::models::{BiasBaseline, BiasMetric};

/// Baseline corpus store. Analysis only reads; calibration writes.
pub trait IBaselineStore: Send + Sync {
    fn get_baseline(&self, document_type: &str, metric: BiasMetric) -> Option<BiasBaseline>;

    /// Insert or replace the baseline for its (document type, metric).
    fn upsert_baseline(&self, baseline: BiasBaseline) -> ProbityResult<()>;

    fn list_baselines(&self) -> Vec<BiasBaseline>;
}
