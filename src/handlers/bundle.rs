use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorBody;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, trace};

use crate::schemas::AppState;

const MISSING_BUNDLE_HINT: &str =
    "Run `trunk build --release` in workspace/frontend, then point --dist-dir at its dist/ folder";

/// Serves files from the bundle directory. Paths with no matching file get
/// `index.html` so the single-page app can boot from any URL.
pub async fn serve_bundle(State(state): State<AppState>, request: Request) -> Response {
    let index = state.config.index_path();
    if !index.is_file() {
        error!(
            "{} requested but no frontend build under {}",
            request.uri(),
            state.config.dist_dir.display()
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Frontend build not found").with_details(MISSING_BUNDLE_HINT)),
        )
            .into_response();
    }

    trace!("Serving {} from bundle", request.uri());
    let files = ServeDir::new(&state.config.dist_dir).fallback(ServeFile::new(index));
    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
