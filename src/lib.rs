//! Catalog Suggestion Service Library
//!
//! This library crate defines the modules behind the autocomplete endpoint of the
//! catalog. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`suggest`**: The live-typing suggestion engine. Contains the edit-distance scorer,
//!   the blended relevance ranker, and the HTTP handlers exposing it.
//! - **`catalog`**: The candidate retrieval layer. An in-memory, concurrent catalog store
//!   that performs the coarse title/author/genre match feeding the ranker.
//! - **`config`**: Runtime configuration assembled from command-line flags and
//!   environment variables.

pub mod catalog;
pub mod config;
pub mod suggest;
