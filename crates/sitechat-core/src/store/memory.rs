//! In-memory [`DocumentStore`] for tests, demos, and small fixed corpora.
//!
//! Scores passages by how many distinct query terms they contain. Passages
//! with no shared term are not returned. Equal scores keep insertion order.

use std::collections::HashSet;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use super::{terms, DocumentStore};
use crate::models::RetrievedPassage;

struct StoredPassage {
    text: String,
    source_id: String,
    terms: HashSet<String>,
}

/// Term-overlap store backed by a `Vec`.
pub struct InMemoryStore {
    passages: RwLock<Vec<StoredPassage>>,
    limit: usize,
}

impl InMemoryStore {
    /// Create an empty store returning at most `limit` passages per search.
    pub fn new(limit: usize) -> Self {
        Self {
            passages: RwLock::new(Vec::new()),
            limit,
        }
    }

    /// Add a passage.
    pub fn insert(&self, text: impl Into<String>, source_id: impl Into<String>) {
        let text = text.into();
        let terms = terms(&text).into_iter().collect();
        let mut passages = self.passages.write().unwrap_or_else(|e| e.into_inner());
        passages.push(StoredPassage {
            text,
            source_id: source_id.into(),
            terms,
        });
    }

    pub fn len(&self) -> usize {
        self.passages.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(8)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn search(&self, query: &str) -> Result<Vec<RetrievedPassage>> {
        let query_terms: HashSet<String> = terms(query).into_iter().collect();
        if query_terms.is_empty() {
            return Ok(Vec::new());
        }

        let passages = self
            .passages
            .read()
            .map_err(|_| anyhow::anyhow!("in-memory store lock poisoned"))?;

        let mut scored: Vec<(usize, &StoredPassage)> = passages
            .iter()
            .map(|p| (p.terms.intersection(&query_terms).count(), p))
            .filter(|(hits, _)| *hits > 0)
            .collect();

        // Stable sort: equal scores stay in insertion order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.limit);

        Ok(scored
            .into_iter()
            .map(|(hits, p)| {
                RetrievedPassage::new(
                    p.text.clone(),
                    p.source_id.clone(),
                    hits as f32 / query_terms.len() as f32,
                )
            })
            .collect())
    }
}
