use super::service::SuggestionService;
use super::types::Suggestion;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /search/suggestions?q=`: always answers with a JSON array, possibly empty.
pub async fn handle_suggestions(
    Query(params): Query<SuggestParams>,
    Extension(service): Extension<Arc<SuggestionService>>,
) -> Json<Vec<Suggestion>> {
    Json(service.suggest(&params.q))
}
