use dashmap::DashMap;
use probity_core::errors::ProbityResult;
use probity_core::models::{BaselineKey, BiasBaseline, BiasMetric};
use probity_core::traits::IBaselineStore;
use probity_observability::events;

use super::seed;

/// Concurrent in-process baseline store keyed by (document type, metric).
#[derive(Debug, Default)]
pub struct InMemoryBaselineStore {
    baselines: DashMap<BaselineKey, BiasBaseline>,
}

impl InMemoryBaselineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the estimated seed baselines.
    pub fn with_defaults() -> Self {
        let store = Self::new();
        for baseline in seed::default_baselines() {
            store.baselines.insert(baseline.key(), baseline);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl IBaselineStore for InMemoryBaselineStore {
    fn get_baseline(&self, document_type: &str, metric: BiasMetric) -> Option<BiasBaseline> {
        self.baselines
            .get(&BaselineKey::new(document_type, metric))
            .map(|entry| entry.value().clone())
    }

    fn upsert_baseline(&self, baseline: BiasBaseline) -> ProbityResult<()> {
        baseline.validate()?;
        events::baseline_upserted(
            &baseline.document_type,
            baseline.metric.as_str(),
            baseline.corpus_size,
        );
        self.baselines.insert(baseline.key(), baseline);
        Ok(())
    }

    fn list_baselines(&self) -> Vec<BiasBaseline> {
        let mut all: Vec<BiasBaseline> = self
            .baselines
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.key().cmp(&b.key()));
        all
    }
}
