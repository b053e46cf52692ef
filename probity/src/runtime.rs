//! Probity: owns every engine and the shared similarity estimator.

use std::sync::Arc;

use probity_bias::{BiasEngine, InMemoryBaselineStore};
use probity_contradiction::ContradictionEngine;
use probity_core::config::ProbityConfig;
use probity_core::errors::ProbityResult;
use probity_core::models::{
    BiasReportSummary, BiasSignal, Claim, Contradiction, ContradictionReport, DegradationEvent,
};
use probity_core::traits::{IBaselineStore, IEmbeddingProvider};
use probity_similarity::{PolarityDetector, SimilarityEstimator};

/// Options for building a [`Probity`] instance.
#[derive(Default)]
pub struct ProbityOptions {
    /// TOML configuration. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Host-supplied embeddings; heads the similarity chain when set.
    pub embedding_provider: Option<Arc<dyn IEmbeddingProvider>>,
    /// Baseline corpus. If None, an in-memory store seeded with the
    /// estimated defaults.
    pub baseline_store: Option<Arc<dyn IBaselineStore>>,
}

pub struct Probity {
    config: ProbityConfig,
    similarity: Arc<SimilarityEstimator>,
    contradiction: ContradictionEngine,
    bias: BiasEngine,
    baselines: Arc<dyn IBaselineStore>,
}

impl Probity {
    /// Default options with the given configuration.
    pub fn new(config: ProbityConfig) -> ProbityResult<Self> {
        Self::build(config, None, None)
    }

    pub fn with_options(opts: ProbityOptions) -> ProbityResult<Self> {
        let config = match &opts.config_toml {
            Some(source) => ProbityConfig::from_toml(source)?,
            None => ProbityConfig::default(),
        };
        Self::build(config, opts.embedding_provider, opts.baseline_store)
    }

    pub fn from_toml(source: &str) -> ProbityResult<Self> {
        Self::new(ProbityConfig::from_toml(source)?)
    }

    fn build(
        config: ProbityConfig,
        embedding_provider: Option<Arc<dyn IEmbeddingProvider>>,
        baseline_store: Option<Arc<dyn IBaselineStore>>,
    ) -> ProbityResult<Self> {
        config.validate()?;

        let similarity = Arc::new(match embedding_provider {
            Some(provider) => {
                SimilarityEstimator::with_embedding_provider(&config.similarity, provider)
            }
            None => SimilarityEstimator::new(&config.similarity),
        });
        let polarity = Arc::new(PolarityDetector::new(&config.similarity));
        let contradiction = ContradictionEngine::new(
            config.contradiction.clone(),
            similarity.clone(),
            polarity,
        )?;

        let baselines: Arc<dyn IBaselineStore> = match baseline_store {
            Some(store) => store,
            None => Arc::new(InMemoryBaselineStore::with_defaults()),
        };
        let bias = BiasEngine::new(config.bias.clone(), baselines.clone())?;

        tracing::info!(
            similarity = %similarity.active_strategy(),
            baselines = baselines.list_baselines().len(),
            "probity initialized"
        );

        Ok(Self {
            config,
            similarity,
            contradiction,
            bias,
            baselines,
        })
    }

    pub fn config(&self) -> &ProbityConfig {
        &self.config
    }

    pub fn baseline_store(&self) -> &Arc<dyn IBaselineStore> {
        &self.baselines
    }

    pub fn detect_contradictions(
        &self,
        claims: &[Claim],
        case_id: &str,
    ) -> ProbityResult<ContradictionReport> {
        self.contradiction.detect_contradictions(claims, case_id)
    }

    pub fn compare_claims(
        &self,
        a: &Claim,
        b: &Claim,
        case_id: &str,
    ) -> ProbityResult<Option<Contradiction>> {
        self.contradiction.compare_claims(a, b, case_id)
    }

    pub fn analyse_document_bias(
        &self,
        document_id: &str,
        document_type: &str,
        text: &str,
        case_id: &str,
    ) -> ProbityResult<Vec<BiasSignal>> {
        self.bias
            .analyse_document_bias(document_id, document_type, text, case_id)
    }

    pub fn analyse_entity_attribution(
        &self,
        claims: &[Claim],
        entity_id: &str,
        case_id: &str,
    ) -> ProbityResult<Option<BiasSignal>> {
        self.bias
            .analyse_entity_attribution(claims, entity_id, case_id)
    }

    pub fn generate_bias_report(&self, signals: &[BiasSignal], case_id: &str) -> BiasReportSummary {
        self.bias.generate_bias_report(signals, case_id)
    }

    /// Calibrate baselines for a document type from a reference corpus.
    pub fn calibrate_baselines(
        &self,
        document_type: &str,
        documents: &[&str],
    ) -> ProbityResult<usize> {
        self.bias.calibrate(document_type, documents)
    }

    /// Similarity fallbacks taken since construction.
    pub fn degradation_events(&self) -> Vec<DegradationEvent> {
        self.similarity.degradation_events()
    }
}
