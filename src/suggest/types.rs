use serde::{Deserialize, Serialize};

/// A catalog entry that survived the coarse match and is awaiting fine ranking.
///
/// Supplied by the retrieval layer as an immutable snapshot. A missing title is
/// carried as an empty string so partially populated entries still rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// A candidate paired with its composite score for the duration of one ranking call.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub score: i64,
}

/// The record returned to the caller for display.
///
/// Always carries all four fields; absent author or cover are rendered as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover: String,
}

impl From<&Candidate> for Suggestion {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            title: candidate.title.clone(),
            author: candidate.author.clone().unwrap_or_default(),
            cover: candidate.cover.clone().unwrap_or_default(),
        }
    }
}

/// Bonuses applied by the ranker on top of the edit-distance penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Awarded when the title starts with the query.
    pub prefix_bonus: i64,
    /// Awarded when the title contains the query anywhere but at the start.
    pub contains_bonus: i64,
    /// Awarded when the author contains the query, independent of the title bonus.
    pub author_bonus: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            prefix_bonus: 200,
            contains_bonus: 150,
            author_bonus: 60,
        }
    }
}
