use anyhow::Result;
use axum::{extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use textsearch_core::corpus::load_directory;
use textsearch_core::{Hit, IndexStore};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_ms: u128,
    pub total_hits: usize,
    pub results: Vec<Hit<'a>>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub num_docs: usize,
    pub num_terms: usize,
}

/// The index is built once at startup and shared read-only between handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<IndexStore>,
}

pub fn build_app(dir: &Path, extension: &str) -> Result<Router> {
    let store = load_directory(dir, extension)?;
    tracing::info!(num_docs = store.num_docs(), num_terms = store.num_terms(), "index ready");
    Ok(router(store))
}

pub fn router(store: IndexStore) -> Router {
    let app_state = AppState { store: Arc::new(store) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, (StatusCode, String)> {
    let start = std::time::Instant::now();
    // Same contract as the interactive loop: lowercase only, blank queries never reach search.
    let query = params.q.to_lowercase();
    if query.trim().is_empty() {
        tracing::warn!("rejected query with no terms");
        return Err((StatusCode::BAD_REQUEST, "query must contain at least one term".into()));
    }
    let ids = state
        .store
        .search(&query)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let results = state.store.hits(&ids);
    let elapsed = start.elapsed();
    // Serialized here, while the hits still borrow the store and `ids`.
    let body = SearchResponse { query: &query, took_ms: elapsed.as_millis(), total_hits: results.len(), results };
    Ok(Json(body).into_response())
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { num_docs: state.store.num_docs(), num_terms: state.store.num_terms() })
}
