//! Suggestion Ranker
//!
//! Turns a coarse candidate set into the ordered top-K suggestion list.
//!
//! ## Scoring
//! For the lower-cased query `q`, title `t`, and author `auth`:
//! - `t` starts with `q`: `+prefix_bonus`
//! - otherwise `t` contains `q`: `+contains_bonus`
//! - `auth` contains `q`: `+author_bonus`
//! - minus `distance(t, q)`, unnormalised, so short titles close to the query win.
//!
//! ## Ordering
//! Scores are sorted descending with a stable sort. Equal scores keep the order in which
//! the retrieval layer returned them, so that order is part of the ranking contract.

use super::distance::distance;
use super::types::{Candidate, ScoredCandidate, ScoringWeights, Suggestion};

/// Stateless ranker configured with a fixed set of [`ScoringWeights`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionRanker {
    weights: ScoringWeights,
}

impl SuggestionRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Scores a single candidate against `query`. Case-insensitive.
    pub fn score(&self, query: &str, candidate: &Candidate) -> i64 {
        self.score_lowered(&query.to_lowercase(), candidate)
    }

    /// Scores, orders, truncates to `top_k`, and projects the candidates.
    ///
    /// Returns an empty list for an empty candidate set. Never returns more than
    /// `top_k` entries or more entries than were supplied.
    pub fn rank(&self, query: &str, candidates: &[Candidate], top_k: usize) -> Vec<Suggestion> {
        self.scored(query, candidates)
            .into_iter()
            .take(top_k)
            .map(|scored| Suggestion::from(scored.candidate))
            .collect()
    }

    /// Every candidate with its score, in final ranked order.
    pub fn scored<'a>(&self, query: &str, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
        let query = query.to_lowercase();

        let mut scored: Vec<ScoredCandidate<'a>> = candidates
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate,
                score: self.score_lowered(&query, candidate),
            })
            .collect();

        // `sort_by` is stable; ties keep retrieval order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    fn score_lowered(&self, query: &str, candidate: &Candidate) -> i64 {
        let title = candidate.title.to_lowercase();
        let mut score = 0i64;

        if title.starts_with(query) {
            score += self.weights.prefix_bonus;
        } else if title.contains(query) {
            score += self.weights.contains_bonus;
        }

        if let Some(author) = &candidate.author {
            if author.to_lowercase().contains(query) {
                score += self.weights.author_bonus;
            }
        }

        score - distance(&title, query) as i64
    }
}

/// Ranks with the default weights.
pub fn rank(query: &str, candidates: &[Candidate], top_k: usize) -> Vec<Suggestion> {
    SuggestionRanker::default().rank(query, candidates, top_k)
}
