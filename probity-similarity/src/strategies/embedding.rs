//! Dense-embedding cosine similarity.

use std::sync::Arc;

use probity_core::errors::{ProbityResult, SimilarityError};
use probity_core::models::SimilarityStrategyKind;
use probity_core::traits::{IEmbeddingProvider, ISimilarityStrategy};

/// Cosine similarity over vectors from a host-supplied provider.
///
/// Unavailable when no provider is configured or the provider reports
/// itself unavailable. Negative cosine is clamped to 0.
pub struct EmbeddingStrategy {
    provider: Option<Arc<dyn IEmbeddingProvider>>,
}

impl EmbeddingStrategy {
    pub fn new(provider: Option<Arc<dyn IEmbeddingProvider>>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name())
    }
}

impl ISimilarityStrategy for EmbeddingStrategy {
    fn kind(&self) -> SimilarityStrategyKind {
        SimilarityStrategyKind::Embedding
    }

    fn is_available(&self) -> bool {
        self.provider.as_ref().is_some_and(|p| p.is_available())
    }

    fn score(&self, a: &str, b: &str) -> ProbityResult<f64> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| SimilarityError::StrategyUnavailable {
                strategy: SimilarityStrategyKind::Embedding.to_string(),
            })?;

        let va = provider.embed(a)?;
        let vb = provider.embed(b)?;
        if va.len() != vb.len() {
            return Err(SimilarityError::DimensionMismatch {
                expected: va.len(),
                actual: vb.len(),
            }
            .into());
        }
        cosine(&va, &vb)
            .map(|c| c.clamp(0.0, 1.0))
            .ok_or_else(|| {
                SimilarityError::InsufficientInput {
                    strategy: SimilarityStrategyKind::Embedding.to_string(),
                    reason: "zero-norm embedding".to_string(),
                }
                .into()
            })
    }
}

/// Cosine similarity in f64. `None` for empty or zero-norm vectors.
pub fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.is_empty() || a.len() != b.len() {
        return None;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON || !denom.is_finite() {
        return None;
    }
    let cos = dot / denom;
    cos.is_finite().then_some(cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider {
        available: bool,
    }

    impl IEmbeddingProvider for FixedProvider {
        fn embed(&self, text: &str) -> ProbityResult<Vec<f32>> {
            Ok(vec![text.len() as f32, 1.0, 0.0])
        }
        fn dimensions(&self) -> usize {
            3
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_available(&self) -> bool {
            self.available
        }
    }

    #[test]
    fn no_provider_is_unavailable() {
        let s = EmbeddingStrategy::new(None);
        assert!(!s.is_available());
        assert!(s.score("a", "b").is_err());
    }

    #[test]
    fn unavailable_provider_is_unavailable() {
        let s = EmbeddingStrategy::new(Some(Arc::new(FixedProvider { available: false })));
        assert!(!s.is_available());
    }

    #[test]
    fn identical_vectors_score_one() {
        let s = EmbeddingStrategy::new(Some(Arc::new(FixedProvider { available: true })));
        let score = s.score("abc", "xyz").unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_rejects_zero_vectors() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 0.0]), None);
        assert_eq!(cosine(&[], &[]), None);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), Some(0.0));
    }
}
