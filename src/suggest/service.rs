use super::ranker::SuggestionRanker;
use super::types::Suggestion;
use crate::catalog::source::CandidateSource;
use crate::config::SuggestLimits;

use std::sync::Arc;

/// Applies the query policy around the ranker: trimming, the minimum-length cutoff,
/// and bounded candidate retrieval.
pub struct SuggestionService {
    source: Arc<dyn CandidateSource>,
    ranker: SuggestionRanker,
    limits: SuggestLimits,
}

impl SuggestionService {
    pub fn new(
        source: Arc<dyn CandidateSource>,
        ranker: SuggestionRanker,
        limits: SuggestLimits,
    ) -> Arc<Self> {
        Arc::new(Self {
            source,
            ranker,
            limits,
        })
    }

    pub fn limits(&self) -> SuggestLimits {
        self.limits
    }

    /// Returns the ranked suggestions for a raw, untrimmed query.
    ///
    /// Short queries return an empty list without touching the candidate source.
    /// Retrieval failures are logged and also degrade to an empty list.
    pub fn suggest(&self, raw_query: &str) -> Vec<Suggestion> {
        let query = raw_query.trim();
        if query.chars().count() < self.limits.min_query_len {
            return Vec::new();
        }

        let candidates = match self.source.coarse_match(query, self.limits.candidate_limit) {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::error!("Candidate retrieval failed for {:?}: {:#}", query, err);
                return Vec::new();
            }
        };

        let suggestions = self.ranker.rank(query, &candidates, self.limits.top_k);
        tracing::debug!(
            "Ranked {} candidates into {} suggestions for {:?}",
            candidates.len(),
            suggestions.len(),
            query
        );
        suggestions
    }
}
