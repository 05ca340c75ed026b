//! Suggestion Service Module
//!
//! The live-typing autocomplete engine of the catalog.
//!
//! ## Overview
//! Given a partial query, the engine takes a bounded set of coarsely matched catalog
//! entries (produced by the `catalog` module) and refines them into a short, ordered
//! list of suggestions suitable for a dropdown.
//!
//! ## Responsibilities
//! - **Scoring**: Edit distance between the lower-cased title and query.
//! - **Ranking**: Blending prefix, substring, and author matches with the distance penalty.
//! - **Projection**: Reducing each ranked entry to the `{id, title, author, cover}` shape.
//! - **API**: Exposing suggestions via the `/search/suggestions` HTTP endpoint.
//!
//! ## Submodules
//! - **`distance`**: Levenshtein edit distance.
//! - **`ranker`**: Composite scoring, stable ordering, and truncation.
//! - **`service`**: Query policy (trimming, minimum length) and candidate retrieval.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Candidates, suggestions, and scoring weights.

pub mod distance;
pub mod handlers;
pub mod ranker;
pub mod service;
pub mod types;
