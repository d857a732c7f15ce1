//! Fallback web search contract and web-context assembly.
//!
//! When local retrieval yields nothing, the orchestrator asks a
//! [`SearchProvider`] for site-scoped results, fetches each result's page
//! text, and folds the pages into a single context string with
//! [`assemble_web_context`].

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single web search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Site-scoped web search plus page fetching.
///
/// # Contract
///
/// - [`search`](SearchProvider::search) may fail; the caller treats a
///   failure as zero results.
/// - [`fetch_page_text`](SearchProvider::fetch_page_text) never fails: it
///   returns an empty string when the page cannot be fetched.
/// - Each call is attempted once. Implementations must not loop on retry.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search `site` for `query`, returning at most `max_results` hits.
    async fn search(&self, query: &str, site: &str, max_results: usize) -> Result<Vec<WebResult>>;

    /// Fetch the visible text of `url`.
    async fn fetch_page_text(&self, url: &str) -> String;
}

/// Provider that never finds anything.
///
/// Used when web fallback is disabled; the orchestrator then goes straight
/// to the "visit the website" answer on an empty knowledge base.
pub struct NoSearch;

#[async_trait]
impl SearchProvider for NoSearch {
    async fn search(&self, _query: &str, _site: &str, _max_results: usize) -> Result<Vec<WebResult>> {
        Ok(Vec::new())
    }

    async fn fetch_page_text(&self, _url: &str) -> String {
        String::new()
    }
}

/// Build a `site:`-restricted search query.
pub fn site_query(query: &str, site: &str) -> String {
    format!("{} site:{}", query, site)
}

/// Fold fetched pages into one context string.
///
/// Pages are taken in result order. Pages with blank text are skipped;
/// the first `max_chunks` usable pages are rendered as
/// `[title](url): text` and joined by blank lines. A missing title falls
/// back to the URL.
pub fn assemble_web_context(pages: &[(WebResult, String)], max_chunks: usize) -> String {
    pages
        .iter()
        .filter_map(|(hit, text)| {
            let text = text.trim();
            if hit.url.is_empty() || text.is_empty() {
                return None;
            }
            let title = if hit.title.trim().is_empty() {
                hit.url.as_str()
            } else {
                hit.title.as_str()
            };
            Some(format!("[{}]({}): {}", title, hit.url, text))
        })
        .take(max_chunks)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, url: &str) -> WebResult {
        WebResult {
            title: title.to_string(),
            url: url.to_string(),
            snippet: String::new(),
        }
    }

    #[test]
    fn test_site_query() {
        assert_eq!(site_query("refund policy", "example.com"), "refund policy site:example.com");
    }

    #[test]
    fn test_assemble_skips_blank_pages() {
        let pages = vec![
            (hit("Refunds", "https://example.com/refunds"), "Refunds within 30 days.".to_string()),
            (hit("Empty", "https://example.com/empty"), "   ".to_string()),
            (hit("", "https://example.com/faq"), "FAQ text".to_string()),
        ];
        let ctx = assemble_web_context(&pages, 10);
        assert_eq!(
            ctx,
            "[Refunds](https://example.com/refunds): Refunds within 30 days.\n\n\
             [https://example.com/faq](https://example.com/faq): FAQ text"
        );
    }

    #[test]
    fn test_assemble_caps_pages() {
        let pages: Vec<(WebResult, String)> = (0..5)
            .map(|i| (hit("t", &format!("https://e.com/{}", i)), format!("page {}", i)))
            .collect();
        let ctx = assemble_web_context(&pages, 2);
        assert_eq!(ctx.matches("https://e.com/").count(), 2);
        assert!(!ctx.contains("page 2"));
    }

    #[test]
    fn test_assemble_skips_missing_url() {
        let pages = vec![(hit("No url", ""), "text".to_string())];
        assert!(assemble_web_context(&pages, 10).is_empty());
    }

    #[tokio::test]
    async fn test_no_search_is_empty() {
        let provider = NoSearch;
        assert!(provider.search("q", "example.com", 5).await.unwrap().is_empty());
        assert!(provider.fetch_page_text("https://example.com").await.is_empty());
    }
}
