//! Maximal marginal relevance (MMR) reranking.
//!
//! Picks `k` candidates that are relevant to the query but not redundant
//! with each other:
//!
//! ```text
//! score(d) = λ · sim(q, d) − (1 − λ) · max_{s ∈ selected} sim(d, s)
//! ```
//!
//! `λ = 1` is pure similarity ranking, `λ = 0` is pure diversity. The first
//! pick is always the candidate most similar to the query. Ties go to the
//! earlier candidate.

use crate::embedding::cosine_similarity;

/// Return indices into `candidates` in selection order.
pub fn mmr_select(query: &[f32], candidates: &[Vec<f32>], k: usize, lambda: f32) -> Vec<usize> {
    if candidates.is_empty() || k == 0 {
        return Vec::new();
    }

    let relevance: Vec<f32> = candidates
        .iter()
        .map(|c| cosine_similarity(query, c))
        .collect();

    let mut selected: Vec<usize> = Vec::with_capacity(k.min(candidates.len()));
    // Highest similarity to any already-selected candidate, per candidate.
    let mut redundancy = vec![f32::NEG_INFINITY; candidates.len()];

    while selected.len() < k.min(candidates.len()) {
        let mut best: Option<(usize, f32)> = None;

        for (i, rel) in relevance.iter().enumerate() {
            if selected.contains(&i) {
                continue;
            }
            let score = if selected.is_empty() {
                *rel
            } else {
                lambda * rel - (1.0 - lambda) * redundancy[i]
            };
            match best {
                Some((_, b)) if score <= b => {}
                _ => best = Some((i, score)),
            }
        }

        let Some((pick, _)) = best else { break };
        selected.push(pick);

        for (i, cand) in candidates.iter().enumerate() {
            let sim = cosine_similarity(&candidates[pick], cand);
            if sim > redundancy[i] {
                redundancy[i] = sim;
            }
        }
    }

    selected
}
