//! Property tests: identity and symmetry of the similarity estimator and
//! symmetry of polarity detection.

use probity_core::config::SimilarityConfig;
use probity_similarity::{PolarityDetector, SimilarityEstimator};
use proptest::prelude::*;

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn identity_is_one(a in sentence()) {
        let est = SimilarityEstimator::new(&SimilarityConfig::default());
        prop_assert_eq!(est.estimate(&a, &a).score, 1.0);
    }

    #[test]
    fn similarity_is_symmetric(a in sentence(), b in sentence()) {
        let config = SimilarityConfig { cache_enabled: false, ..SimilarityConfig::default() };
        let est = SimilarityEstimator::new(&config);
        let ab = est.estimate(&a, &b);
        let ba = est.estimate(&b, &a);
        prop_assert_eq!(ab.score, ba.score);
        prop_assert_eq!(ab.strategy, ba.strategy);
    }

    #[test]
    fn similarity_is_bounded(a in sentence(), b in sentence()) {
        let est = SimilarityEstimator::new(&SimilarityConfig::default());
        let s = est.estimate(&a, &b).score;
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn opposition_is_symmetric(a in sentence(), b in sentence()) {
        let d = PolarityDetector::default();
        prop_assert_eq!(d.detect(&a, &b), d.detect(&b, &a));
    }
}
