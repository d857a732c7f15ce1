//! Query expansion for multi-query retrieval (RAG fusion).
//!
//! One user query becomes the original text plus a fixed set of templated
//! rephrasings. Issuing every variant against the document store widens
//! recall so repeated questions do not keep landing on the same chunks.
//!
//! The original query always comes first, so its matches win ties during
//! context deduplication.

use std::collections::HashSet;

/// Rephrasing templates applied after the original query. `{}` is
/// replaced with the query text.
pub const DEFAULT_TEMPLATES: &[&str] = &["Details about {}", "In-depth explanation of {}"];

/// Deterministic, I/O-free query expander.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    templates: Vec<String>,
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect())
    }
}

impl QueryExpander {
    /// Create an expander from `{}`-style templates.
    pub fn new(templates: Vec<String>) -> Self {
        Self { templates }
    }

    /// Expand `query` into its variants.
    ///
    /// Returns `1..=templates+1` strings, original first, duplicates removed
    /// with the first occurrence kept.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let candidates = std::iter::once(query.to_string())
            .chain(self.templates.iter().map(|t| t.replace("{}", query)));

        let mut seen = HashSet::new();
        candidates
            .filter(|variant| seen.insert(variant.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_first() {
        let variants = QueryExpander::default().expand("refund policy");
        assert_eq!(
            variants,
            vec![
                "refund policy".to_string(),
                "Details about refund policy".to_string(),
                "In-depth explanation of refund policy".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicates_removed_first_wins() {
        let expander = QueryExpander::new(vec!["{}".to_string(), "More on {}".to_string()]);
        let variants = expander.expand("pricing");
        assert_eq!(variants, vec!["pricing".to_string(), "More on pricing".to_string()]);
    }

    #[test]
    fn test_no_templates_returns_original_only() {
        let variants = QueryExpander::new(vec![]).expand("hours");
        assert_eq!(variants, vec!["hours".to_string()]);
    }

    #[test]
    fn test_deterministic() {
        let expander = QueryExpander::default();
        assert_eq!(expander.expand("a b"), expander.expand("a b"));
    }
}
