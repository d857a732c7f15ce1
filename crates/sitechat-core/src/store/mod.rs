//! Document store contract.
//!
//! The orchestrator sees the knowledge base only through [`DocumentStore`]:
//! a query goes in, an ordered list of scored passages comes out. Whether
//! the backend is vector search, full-text search, or a fixture is the
//! implementation's business.
//!
//! Implementations must be `Send + Sync`; the app crate fans one query out
//! into several concurrent `search` calls.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::RetrievedPassage;

/// Similarity-search service over indexed passages.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return passages relevant to `query`, best first. May be empty.
    async fn search(&self, query: &str) -> Result<Vec<RetrievedPassage>>;
}

/// Lowercased alphanumeric terms of `text`, in order, duplicates kept.
pub fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms() {
        assert_eq!(
            terms("What's the Refund-policy?"),
            vec!["what", "s", "the", "refund", "policy"]
        );
        assert!(terms("  ?! ").is_empty());
    }
}
