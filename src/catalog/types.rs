//! Catalog Data Types
//!
//! Defines the stored catalog record and the DTOs returned by the catalog endpoints.

use crate::suggest::types::Candidate;
use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Every field besides `id` is optional in the source documents, so deserialisation
/// fills in defaults instead of rejecting partial entries. An empty `id` is replaced
/// with a generated UUID when the entry is inserted into a store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl CatalogEntry {
    /// Snapshot of the fields the ranker needs.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: self.id.clone(),
            title: self.title.clone().unwrap_or_default(),
            author: self.author.clone(),
            cover: self.cover.clone(),
        }
    }
}

/// Response of the full search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    /// Number of coarse matches before the limit was applied.
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<CatalogEntry>,
}

/// Response of the entry lookup endpoint. `None` means the id is unknown.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub entry: Option<CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}
