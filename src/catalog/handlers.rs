use super::memory::InMemoryCatalog;
use super::types::{EntryResponse, HealthResponse, SearchResponse};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// `GET /search?q=&limit=`: unranked coarse matches in catalog order.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
) -> (StatusCode, Json<SearchResponse>) {
    let query = params.q.trim().to_string();
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let matches = match catalog.find_matches(&query) {
        Ok(matches) => matches,
        Err(err) => {
            tracing::error!("Search failed for {:?}: {:#}", query, err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse {
                    query,
                    total_count: 0,
                    count: 0,
                    results: vec![],
                }),
            );
        }
    };

    let total_count = matches.len();
    let results: Vec<_> = matches.into_iter().take(limit).collect();
    tracing::debug!("Search {:?}: {} of {} matches", query, results.len(), total_count);

    (
        StatusCode::OK,
        Json(SearchResponse {
            query,
            total_count,
            count: results.len(),
            results,
        }),
    )
}

/// `GET /catalog/:id`
pub async fn handle_get_entry(
    Path(id): Path<String>,
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
) -> (StatusCode, Json<EntryResponse>) {
    match catalog.get(&id) {
        Some(entry) => (StatusCode::OK, Json(EntryResponse { entry: Some(entry) })),
        None => {
            tracing::debug!("Catalog entry {} not found", id);
            (StatusCode::NOT_FOUND, Json(EntryResponse { entry: None }))
        }
    }
}

pub async fn handle_health(
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: catalog.len(),
    })
}
