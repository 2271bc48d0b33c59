use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;

use crate::catalog::{ArticleCatalog, ListFilter, StoredArticle};
use crate::error::QueryError;

/// Shared, read-only state. The catalog is built once before the router and
/// never written afterwards.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<ArticleCatalog>,
}

impl AppState {
    pub fn new(catalog: ArticleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/articles", get(list_articles))
        .route("/articles/{id}", get(get_article))
        .route("/search", get(search_articles))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn list_articles(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<StoredArticle>>, QueryError> {
    counter!("api_requests_total", "route" => "articles").increment(1);
    let rows = state.catalog.list(&filter)?;
    Ok(Json(rows.into_iter().cloned().collect()))
}

async fn get_article(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<StoredArticle>, QueryError> {
    counter!("api_requests_total", "route" => "article").increment(1);
    let id: u64 = raw.parse().map_err(|_| QueryError::InvalidId { value: raw.clone() })?;
    state.catalog.get(id).cloned().map(Json)
}

#[derive(serde::Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StoredArticle>>, QueryError> {
    counter!("api_requests_total", "route" => "search").increment(1);
    let rows = state.catalog.search(&params.q)?;
    Ok(Json(rows.into_iter().cloned().collect()))
}
