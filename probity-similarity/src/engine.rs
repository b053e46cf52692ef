//! SimilarityEstimator: ordered strategy chain with caching and
//! fallback accounting. Implements `ISimilarityScorer`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use probity_core::config::SimilarityConfig;
use probity_core::models::{DegradationEvent, SimilarityScore, SimilarityStrategyKind};
use probity_core::traits::{IEmbeddingProvider, ISimilarityScorer, ISimilarityStrategy};
use probity_observability::events;
use tracing::{debug, info};

use crate::cache::SimilarityCache;
use crate::strategies::{
    lexical, EmbeddingStrategy, FuzzyTokenStrategy, LexicalJaccardStrategy,
};
use crate::text;

/// Scores text similarity by trying strategies in priority order.
///
/// Safe to share across threads: the cache is concurrent and usage
/// counters live in a `DashMap`.
pub struct SimilarityEstimator {
    chain: Vec<Box<dyn ISimilarityStrategy>>,
    cache: Option<SimilarityCache>,
    usage: DashMap<SimilarityStrategyKind, u64>,
}

impl SimilarityEstimator {
    /// Default chain without an embedding provider: the embedding link is
    /// present but unavailable, so scoring starts at fuzzy matching.
    pub fn new(config: &SimilarityConfig) -> Self {
        Self::build(config, None)
    }

    /// Default chain headed by the given embedding provider.
    pub fn with_embedding_provider(
        config: &SimilarityConfig,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> Self {
        Self::build(config, Some(provider))
    }

    fn build(config: &SimilarityConfig, provider: Option<Arc<dyn IEmbeddingProvider>>) -> Self {
        let chain: Vec<Box<dyn ISimilarityStrategy>> = vec![
            Box::new(EmbeddingStrategy::new(provider)),
            Box::new(FuzzyTokenStrategy::new(config.fuzzy_max_chars)),
            Box::new(LexicalJaccardStrategy),
        ];
        let cache = config
            .cache_enabled
            .then(|| SimilarityCache::new(config.cache_size));
        let estimator = Self::from_strategies(chain, cache);

        info!(
            strategy = %estimator.active_strategy(),
            cache = config.cache_enabled,
            "SimilarityEstimator initialized"
        );
        estimator
    }

    /// Custom chain, in priority order.
    pub fn from_strategies(
        chain: Vec<Box<dyn ISimilarityStrategy>>,
        cache: Option<SimilarityCache>,
    ) -> Self {
        Self {
            chain,
            cache,
            usage: DashMap::new(),
        }
    }

    /// Score two texts. Never fails: the lexical strategy is the floor.
    pub fn estimate(&self, a: &str, b: &str) -> SimilarityScore {
        let norm_a = text::normalize(a);
        let norm_b = text::normalize(b);

        if norm_a == norm_b {
            return SimilarityScore::new(1.0, self.active_strategy());
        }

        let key = self
            .cache
            .as_ref()
            .map(|_| SimilarityCache::pair_key(&norm_a, &norm_b));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(hit) = cache.get(key) {
                return hit;
            }
        }

        // Fixed argument order keeps every strategy symmetric.
        let (first, second) = if norm_a <= norm_b { (a, b) } else { (b, a) };
        let score = self.score_with_chain(first, second);

        *self.usage.entry(score.strategy).or_insert(0) += 1;
        if let Some(primary) = self.primary_strategy() {
            if primary != score.strategy {
                events::similarity_degraded(primary, score.strategy);
            }
        }

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.insert(key, score);
        }
        score
    }

    fn score_with_chain(&self, a: &str, b: &str) -> SimilarityScore {
        for strategy in &self.chain {
            if !strategy.is_available() {
                continue;
            }
            match strategy.score(a, b) {
                Ok(score) if score.is_finite() => {
                    return SimilarityScore::new(score, strategy.kind());
                }
                Ok(score) => {
                    debug!(strategy = %strategy.kind(), score, "non-finite score, trying next");
                }
                Err(e) => {
                    debug!(strategy = %strategy.kind(), error = %e, "strategy failed, trying next");
                }
            }
        }
        SimilarityScore::new(
            lexical::jaccard_similarity(a, b),
            SimilarityStrategyKind::LexicalJaccard,
        )
    }

    /// The highest-priority strategy in the chain, available or not.
    pub fn primary_strategy(&self) -> Option<SimilarityStrategyKind> {
        self.chain.first().map(|s| s.kind())
    }

    /// The first currently available strategy.
    pub fn active_strategy(&self) -> SimilarityStrategyKind {
        self.chain
            .iter()
            .find(|s| s.is_available())
            .map(|s| s.kind())
            .unwrap_or(SimilarityStrategyKind::LexicalJaccard)
    }

    /// How many scores each strategy has produced (cache misses only).
    pub fn strategy_usage(&self) -> BTreeMap<SimilarityStrategyKind, u64> {
        self.usage
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }

    /// One event per fallback strategy that served any score.
    pub fn degradation_events(&self) -> Vec<DegradationEvent> {
        let Some(primary) = self.primary_strategy() else {
            return Vec::new();
        };
        let now = Utc::now();
        self.strategy_usage()
            .into_iter()
            .filter(|(kind, count)| *kind != primary && *count > 0)
            .map(|(kind, occurrences)| DegradationEvent {
                component: "similarity".to_string(),
                failure: format!("{primary} unavailable"),
                fallback_used: kind.to_string(),
                occurrences,
                timestamp: now,
            })
            .collect()
    }

    pub fn cache(&self) -> Option<&SimilarityCache> {
        self.cache.as_ref()
    }
}

impl ISimilarityScorer for SimilarityEstimator {
    fn similarity(&self, a: &str, b: &str) -> SimilarityScore {
        self.estimate(a, b)
    }

    fn scoring_strategy(&self) -> Option<SimilarityStrategyKind> {
        Some(self.active_strategy())
    }
}
