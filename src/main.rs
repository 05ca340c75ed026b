use anyhow::Context;
use axum::{extract::Extension, routing::get, Router};
use catalog_suggest::catalog::handlers::{handle_get_entry, handle_health, handle_search};
use catalog_suggest::catalog::memory::InMemoryCatalog;
use catalog_suggest::config::ServerConfig;
use catalog_suggest::suggest::handlers::handle_suggestions;
use catalog_suggest::suggest::ranker::SuggestionRanker;
use catalog_suggest::suggest::service::SuggestionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    // 1. Catalog:
    let catalog = InMemoryCatalog::new();
    match &config.catalog_path {
        Some(path) => {
            catalog.load_json(path)?;
        }
        None => {
            tracing::warn!("No catalog file configured, starting with an empty catalog");
        }
    }

    // 2. Suggestion engine:
    let service = SuggestionService::new(
        catalog.clone(),
        SuggestionRanker::new(config.weights),
        config.limits,
    );
    tracing::info!(
        "Suggestions: top_k={} candidate_limit={} min_query_len={} weights={:?}",
        config.limits.top_k,
        config.limits.candidate_limit,
        config.limits.min_query_len,
        config.weights
    );

    // 3. HTTP Router:
    let app = Router::new()
        .route("/search/suggestions", get(handle_suggestions))
        .route("/search", get(handle_search))
        .route("/catalog/:id", get(handle_get_entry))
        .route("/health", get(handle_health))
        .layer(Extension(service))
        .layer(Extension(catalog));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
