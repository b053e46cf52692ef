//! Pairwise similarity cache using moka.
//!
//! Keys are blake3 hashes of the order-independent normalized pair, so
//! `(a, b)` and `(b, a)` share an entry. Purely an optimisation.

use std::time::Duration;

use moka::sync::Cache;
use probity_core::models::SimilarityScore;

pub struct SimilarityCache {
    cache: Cache<String, SimilarityScore>,
}

impl SimilarityCache {
    /// Create a new cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .build();

        Self { cache }
    }

    /// Hash of the normalized pair, independent of argument order.
    pub fn pair_key(norm_a: &str, norm_b: &str) -> String {
        let (lo, hi) = if norm_a <= norm_b {
            (norm_a, norm_b)
        } else {
            (norm_b, norm_a)
        };
        let mut hasher = blake3::Hasher::new();
        hasher.update(lo.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(hi.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<SimilarityScore> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, score: SimilarityScore) {
        self.cache.insert(key, score);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probity_core::models::SimilarityStrategyKind;

    #[test]
    fn pair_key_is_symmetric() {
        assert_eq!(
            SimilarityCache::pair_key("alpha", "beta"),
            SimilarityCache::pair_key("beta", "alpha")
        );
        assert_ne!(
            SimilarityCache::pair_key("alpha", "beta"),
            SimilarityCache::pair_key("alpha", "gamma")
        );
    }

    #[test]
    fn insert_and_get() {
        let cache = SimilarityCache::new(100);
        let score = SimilarityScore::new(0.42, SimilarityStrategyKind::FuzzyToken);
        cache.insert("k".to_string(), score);
        assert_eq!(cache.get("k"), Some(score));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn clear_empties_cache() {
        let cache = SimilarityCache::new(100);
        cache.insert(
            "a".to_string(),
            SimilarityScore::new(1.0, SimilarityStrategyKind::LexicalJaccard),
        );
        cache.clear();
        // moka may not immediately reflect invalidation in entry_count,
        // but get should return None.
        assert_eq!(cache.get("a"), None);
    }
}
