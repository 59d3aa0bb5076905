use axum::{extract::State, response::Json};
use common::HealthResponse;
use tracing::instrument;

use crate::schemas::AppState;

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle = state.config.has_bundle();

    let response = HealthResponse {
        status: if bundle { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bundle,
        upstream: state.config.api_upstream.clone(),
    };

    Json(response)
}
