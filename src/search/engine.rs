use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::query::NormalizedQuery;
use super::scorer::LexicalScorer;
use crate::core::cache::{CacheStats, QueryCache};
use crate::core::error::Result;
use crate::data::{Record, RecordStore};

const CACHE_NAMESPACE: &str = "remedies";


#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub record: Arc<Record>,
    pub score: u32,
    /// Index of the record in dataset order.
    pub position: usize,
}

/// Scores every record, drops non-matches, sorts by score (ties keep dataset
/// order), keeps the first record per `Disease` and truncates.
pub struct RetrievalEngine {
    store: Arc<RecordStore>,
    scorer: LexicalScorer,
    cache: Option<QueryCache<Vec<ScoredCandidate>>>,
}

impl RetrievalEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            scorer: LexicalScorer::new(),
            cache: None,
        }
    }

    pub fn with_scorer(mut self, scorer: LexicalScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// A zero capacity leaves caching off.
    pub fn with_cache(mut self, capacity: usize, ttl_secs: u64) -> Self {
        self.cache = QueryCache::new(capacity, ttl_secs);
        self
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<Arc<Record>>> {
        let scored = self.retrieve_scored(query, limit).await?;
        Ok(scored.into_iter().map(|c| c.record).collect())
    }

    pub async fn retrieve_scored(&self, query: &str, limit: usize) -> Result<Vec<ScoredCandidate>> {
        let normalized = NormalizedQuery::parse(query);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.store.load().await?;

        let cache_key = QueryCache::<Vec<ScoredCandidate>>::make_key(CACHE_NAMESPACE, &normalized.phrase, limit);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&cache_key) {
                debug!("Remedy cache hit for '{}'", normalized.phrase);
                return Ok(hit);
            }
        }

        let mut candidates: Vec<ScoredCandidate> = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let score = self.scorer.score_normalized(&normalized, record);
                (score > 0).then(|| ScoredCandidate {
                    record: Arc::clone(record),
                    score,
                    position,
                })
            })
            .collect();

        let matched = candidates.len();
        // Stable: equal scores stay in dataset order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let mut seen = HashSet::new();
        candidates.retain(|c| seen.insert(c.record.disease.clone()));
        candidates.truncate(limit);

        debug!(
            "Retrieved {} remedies for '{}' ({} of {} records matched)",
            candidates.len(),
            normalized.phrase,
            matched,
            records.len()
        );

        if let Some(cache) = &self.cache {
            cache.set(&cache_key, candidates.clone());
        }

        Ok(candidates)
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|c| c.stats())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}
