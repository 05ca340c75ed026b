//! Catalog Module
//!
//! The candidate retrieval layer that feeds the suggestion engine.
//!
//! ## Core Concepts
//! - **Entries**: Catalog records (title, author, cover, genres) loaded leniently from JSON.
//! - **Coarse match**: A broad, case-insensitive literal substring match over title, author,
//!   and genres, capped to bound the work handed to the ranker.
//! - **Natural order**: Matches come back in insertion order. The ranker's tie-break relies
//!   on this, so the store keeps a sequence number per entry.
//!
//! ## Submodules
//! - **`memory`**: `InMemoryCatalog`, a concurrent store backed by `DashMap`.
//! - **`source`**: The `CandidateSource` trait the suggestion service retrieves through.
//! - **`handlers`**: HTTP handlers for full search, entry lookup, and health.
//! - **`types`**: Entry and response DTOs.

pub mod handlers;
pub mod memory;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;
