use crate::suggest::types::Candidate;

use anyhow::Result;

/// Coarse retrieval of catalog candidates for a query.
///
/// Implementations return entries whose title, author, or genres loosely match
/// `query`, at most `limit` of them, in a stable order. The ranker trusts this set
/// and only refines it; it never re-queries the source.
pub trait CandidateSource: Send + Sync {
    fn coarse_match(&self, query: &str, limit: usize) -> Result<Vec<Candidate>>;
}
