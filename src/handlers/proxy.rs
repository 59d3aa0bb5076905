use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use common::ErrorBody;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::schemas::AppState;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Model service not configured")]
    NotConfigured,
    #[error("Model service unreachable")]
    Unreachable(#[source] reqwest::Error),
    #[error("Failed to relay model service response")]
    Relay(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self {
            ProxyError::NotConfigured => ErrorBody::new(self.to_string()),
            ProxyError::Unreachable(e) => ErrorBody::new(self.to_string()).with_details(e.to_string()),
            ProxyError::Relay(details) => ErrorBody::new(self.to_string()).with_details(details.clone()),
        };
        (status, Json(body)).into_response()
    }
}

/// Forward `GET /dashboard` to the model service
#[instrument(skip(state))]
pub async fn forward_dashboard(State(state): State<AppState>) -> Result<Response, ProxyError> {
    forward(&state, reqwest::Method::GET, "/dashboard", None).await
}

/// Forward `POST /predict` to the model service, body untouched
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn forward_predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, reqwest::Method::POST, "/predict", Some(body)).await
}

async fn forward(
    state: &AppState,
    method: reqwest::Method,
    path: &str,
    body: Option<Bytes>,
) -> Result<Response, ProxyError> {
    let upstream = state
        .config
        .api_upstream
        .as_deref()
        .ok_or(ProxyError::NotConfigured)?;
    let url = format!("{}{}", upstream, path);
    debug!("{} {} - forwarding", method, url);

    let mut request = state.http.request(method.clone(), &url);
    if let Some(body) = body {
        request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_vec());
    }

    let upstream_response = request.send().await.map_err(|e| {
        error!("{} {} - upstream request failed: {}", method, url, e);
        ProxyError::Unreachable(e)
    })?;

    // reqwest and axum sit on different `http` majors, so go through the raw code.
    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .map_err(|e| ProxyError::Relay(e.to_string()))?;
    let content_type = upstream_response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let payload = upstream_response.bytes().await.map_err(|e| {
        error!("{} {} - failed to read upstream body: {}", method, url, e);
        ProxyError::Unreachable(e)
    })?;

    if status.is_success() {
        debug!("{} {} - {} ({} bytes)", method, url, status, payload.len());
    } else {
        warn!("{} {} - upstream answered {}", method, url, status);
    }

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(payload.to_vec()))
        .map_err(|e| ProxyError::Relay(e.to_string()))
}
