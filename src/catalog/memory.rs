use super::source::CandidateSource;
use super::types::CatalogEntry;
use crate::suggest::types::Candidate;

use anyhow::{Context, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use regex::{Regex, RegexBuilder};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

struct StoredEntry {
    /// Insertion position; survives replacement of the entry.
    seq: u64,
    entry: CatalogEntry,
}

/// Concurrent in-memory catalog.
///
/// Reads and writes may happen from any number of request handlers at once. Query
/// results are ordered by first insertion, matching the natural order a document
/// store returns unsorted results in.
pub struct InMemoryCatalog {
    entries: DashMap<String, StoredEntry>,
    next_seq: AtomicU64,
}

impl InMemoryCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Builds a catalog from a list of entries, inserted in iteration order.
    pub fn from_entries<I>(entries: I) -> Arc<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let catalog = Self::default();
        for entry in entries {
            catalog.insert(entry);
        }
        Arc::new(catalog)
    }

    /// Inserts or replaces an entry, returning its id.
    ///
    /// Entries with an empty id receive a fresh UUID. Replacing an existing id keeps
    /// the entry's original position in query results.
    pub fn insert(&self, mut entry: CatalogEntry) -> String {
        if entry.id.trim().is_empty() {
            entry.id = Uuid::new_v4().to_string();
        }
        let id = entry.id.clone();

        match self.entries.entry(id.clone()) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().entry = entry;
            }
            Entry::Vacant(vacant) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(StoredEntry { seq, entry });
            }
        }

        id
    }

    pub fn get(&self, id: &str) -> Option<CatalogEntry> {
        self.entries.get(id).map(|stored| stored.entry.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a JSON array of entries from disk and returns how many were read.
    pub fn load_json(&self, path: &Path) -> Result<usize> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

        let count = entries.len();
        for entry in entries {
            self.insert(entry);
        }

        tracing::info!(
            "Loaded {} catalog entries from {} ({} total)",
            count,
            path.display(),
            self.len()
        );
        Ok(count)
    }

    /// Every entry whose title, author, or any genre contains `query`, ignoring case,
    /// in insertion order. The query is matched literally; an empty query matches nothing.
    pub fn find_matches(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let pattern = literal_pattern(query)?;

        let mut matches: Vec<(u64, CatalogEntry)> = self
            .entries
            .iter()
            .filter(|stored| entry_matches(&pattern, &stored.entry))
            .map(|stored| (stored.seq, stored.entry.clone()))
            .collect();

        matches.sort_by_key(|(seq, _)| *seq);
        Ok(matches.into_iter().map(|(_, entry)| entry).collect())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl CandidateSource for InMemoryCatalog {
    fn coarse_match(&self, query: &str, limit: usize) -> Result<Vec<Candidate>> {
        let mut matches = self.find_matches(query)?;
        matches.truncate(limit);
        Ok(matches.iter().map(CatalogEntry::to_candidate).collect())
    }
}

fn literal_pattern(query: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("failed to compile match pattern for {:?}", query))
}

fn entry_matches(pattern: &Regex, entry: &CatalogEntry) -> bool {
    let field_matches = |field: &Option<String>| {
        field
            .as_deref()
            .map(|value| pattern.is_match(value))
            .unwrap_or(false)
    };

    field_matches(&entry.title)
        || field_matches(&entry.author)
        || entry.genres.iter().any(|genre| pattern.is_match(genre))
}
