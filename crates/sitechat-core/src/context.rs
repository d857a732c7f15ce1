//! Context block assembly from pooled retrieval results.
//!
//! # Algorithm
//!
//! 1. Take passages in pooling order (variant 1's results, then variant 2's, …).
//! 2. Trim each passage; drop empty and whitespace-only text.
//! 3. Drop any passage whose trimmed text was already seen (first wins).
//! 4. Keep the first `max_chunks` survivors.
//! 5. Render each as `Source N:\n<text>`, joined by [`SEPARATOR`].
//!
//! Comparison is exact on the trimmed text, so results of the original
//! query outrank the same text retrieved by a rephrased variant.

use std::collections::HashSet;

use crate::models::RetrievedPassage;

/// Default cap on passages per context block.
pub const MAX_CHUNKS: usize = 10;

/// Visible separator placed between rendered passages.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// One deduplicated passage inside a [`ContextBlock`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntry {
    /// Trimmed passage text.
    pub text: String,
    /// Source of the first occurrence.
    pub source_id: String,
}

/// Ordered, deduplicated, capped passages for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextBlock {
    entries: Vec<ContextEntry>,
}

impl ContextBlock {
    /// Build a block from passages in pooling order.
    pub fn from_pooled<'a, I>(pooled: I, max_chunks: usize) -> Self
    where
        I: IntoIterator<Item = &'a RetrievedPassage>,
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();

        for passage in pooled {
            if entries.len() >= max_chunks {
                break;
            }
            let text = passage.text.trim();
            if text.is_empty() || !seen.insert(text) {
                continue;
            }
            entries.push(ContextEntry {
                text: text.to_string(),
                source_id: passage.source_id.clone(),
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct source ids in first-seen order.
    pub fn sources(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.source_id.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Total whitespace-separated words across all entries.
    pub fn word_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.text.split_whitespace().count())
            .sum()
    }

    /// Render the block as prompt-ready text with `Source N` labels.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("Source {}:\n{}", i + 1, e.text))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passages(texts: &[&str]) -> Vec<RetrievedPassage> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| RetrievedPassage::new(*t, format!("kb{}", i), 1.0))
            .collect()
    }

    #[test]
    fn test_dedup_trimmed_first_wins() {
        let pooled = passages(&["A", "A", " A ", "B"]);
        let block = ContextBlock::from_pooled(&pooled, MAX_CHUNKS);
        assert_eq!(block.texts(), vec!["A", "B"]);
        assert_eq!(block.entries()[0].source_id, "kb0");
        assert_eq!(block.entries()[1].source_id, "kb3");
    }

    #[test]
    fn test_empty_and_blank_dropped() {
        let pooled = passages(&["", "   ", "\n\t", "C"]);
        let block = ContextBlock::from_pooled(&pooled, MAX_CHUNKS);
        assert_eq!(block.texts(), vec!["C"]);
    }

    #[test]
    fn test_truncates_to_max_chunks_in_order() {
        let texts: Vec<String> = (0..15).map(|i| format!("passage {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let pooled = passages(&refs);
        let block = ContextBlock::from_pooled(&pooled, 10);
        assert_eq!(block.len(), 10);
        assert_eq!(block.texts(), refs[..10].to_vec());
    }

    #[test]
    fn test_duplicates_do_not_count_toward_cap() {
        let pooled = passages(&["x", "x", "x", "y", "z"]);
        let block = ContextBlock::from_pooled(&pooled, 2);
        assert_eq!(block.texts(), vec!["x", "y"]);
    }

    #[test]
    fn test_render_labels_and_separator() {
        let pooled = passages(&["first", "second"]);
        let block = ContextBlock::from_pooled(&pooled, MAX_CHUNKS);
        assert_eq!(block.render(), "Source 1:\nfirst\n\n---\n\nSource 2:\nsecond");
    }

    #[test]
    fn test_empty_block_renders_empty() {
        let block = ContextBlock::from_pooled(&[], MAX_CHUNKS);
        assert!(block.is_empty());
        assert_eq!(block.render(), "");
        assert_eq!(block.word_count(), 0);
    }

    #[test]
    fn test_sources_distinct_in_order() {
        let pooled = vec![
            RetrievedPassage::new("a", "https://x/1", 0.9),
            RetrievedPassage::new("b", "https://x/2", 0.8),
            RetrievedPassage::new("c", "https://x/1", 0.7),
        ];
        let block = ContextBlock::from_pooled(&pooled, MAX_CHUNKS);
        assert_eq!(block.sources(), vec!["https://x/1", "https://x/2"]);
    }

    #[test]
    fn test_word_count() {
        let pooled = passages(&["one two", "three four five"]);
        let block = ContextBlock::from_pooled(&pooled, MAX_CHUNKS);
        assert_eq!(block.word_count(), 5);
    }
}
