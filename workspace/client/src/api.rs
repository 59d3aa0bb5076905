use common::{DashboardSnapshot, ErrorBody, PredictResponse, PredictionRequest, PredictionResult};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::transport::{ApiTransport, HttpReply};

pub const DASHBOARD_ENDPOINT: &str = "/dashboard";
pub const PREDICT_ENDPOINT: &str = "/predict";

const DASHBOARD_FALLBACK: &str = "Failed to load dashboard data";
const PREDICT_FALLBACK: &str = "Prediction failed";

/// Typed access to the two backend endpoints.
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `GET /dashboard`
    pub async fn dashboard(&self) -> Result<DashboardSnapshot> {
        let url = self.url(DASHBOARD_ENDPOINT);
        tracing::debug!("GET request to: {}", url);

        let reply = self.transport.get(&url).await.map_err(|e| {
            tracing::error!("GET {} - Request failed: {}", DASHBOARD_ENDPOINT, e);
            ClientError::from(e)
        })?;

        let snapshot = decode::<DashboardSnapshot>(reply, DASHBOARD_FALLBACK)?;
        tracing::info!("GET {} - Success", DASHBOARD_ENDPOINT);
        Ok(snapshot)
    }

    /// `POST /predict`
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let url = self.url(PREDICT_ENDPOINT);
        tracing::debug!("POST request to: {}", url);

        let body = serde_json::to_string(request).map_err(|e| {
            ClientError::transport(format!("Failed to serialize request: {}", e))
        })?;

        let reply = self.transport.post_json(&url, body).await.map_err(|e| {
            tracing::error!("POST {} - Request failed: {}", PREDICT_ENDPOINT, e);
            ClientError::from(e)
        })?;

        let response = decode::<PredictResponse>(reply, PREDICT_FALLBACK)?;
        tracing::info!(
            zone = %request.zone_name,
            model = %response.prediction.model_used,
            "POST {} - Success",
            PREDICT_ENDPOINT
        );
        Ok(response.prediction)
    }
}

/// Maps a reply onto the success payload or the operation's error.
///
/// Non-success statuses take the body's `error` field when there is one and
/// `fallback` otherwise.
fn decode<R: DeserializeOwned>(reply: HttpReply, fallback: &str) -> Result<R> {
    if !reply.ok() {
        let message = match serde_json::from_str::<ErrorBody>(&reply.body) {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => fallback.to_string(),
        };
        tracing::warn!("Non-OK response {}: {}", reply.status, message);
        return Err(ClientError::Request {
            status: reply.status,
            message,
        });
    }

    serde_json::from_str(&reply.body).map_err(|e| {
        let message = format!("Failed to parse response: {}", e);
        tracing::error!("{}", message);
        ClientError::transport(message)
    })
}
