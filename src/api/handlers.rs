use crate::api::AppState;
use crate::search::{SearchHit, SearchResponse, SearchScope, SourceKind, TypeCounts};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Run a federated search.
///
/// `mode` defaults to `full`. The endpoint is fail-open: source failures
/// never surface as an error status, they only show up in
/// `degraded_sources` alongside whatever the surviving sources returned.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchApiResponse> {
    let scope = params.mode.unwrap_or_default();
    let outcome = state.aggregator.search(&params.q, scope).await;

    let degraded_sources = outcome.failed_sources().to_vec();
    let SearchResponse {
        results,
        total_count,
        counts,
    } = outcome.response_or_empty();

    Json(SearchApiResponse {
        results,
        total_count,
        counts,
        degraded_sources,
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    #[serde(default)]
    pub q: String,

    /// `quick` or `full`
    pub mode: Option<SearchScope>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchApiResponse {
    pub results: Vec<SearchHit>,
    pub total_count: usize,
    pub counts: TypeCounts,

    /// Sources that failed during this call; empty when every source answered
    pub degraded_sources: Vec<SourceKind>,
}
