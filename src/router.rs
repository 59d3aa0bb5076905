use crate::handlers::{
    bundle::serve_bundle,
    health::health_check,
    proxy::{forward_dashboard, forward_predict},
};
use crate::schemas::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Model service API, same paths the frontend calls
        .route("/dashboard", get(forward_dashboard))
        .route("/predict", post(forward_predict))
        // Everything else is the frontend bundle
        .fallback(serve_bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
