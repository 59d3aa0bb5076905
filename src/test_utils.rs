pub mod test_utils {
    use crate::config::ServerConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{
        http::StatusCode,
        response::Json,
        routing::{get, post},
        Router,
    };
    use common::PredictionRequest;
    use serde_json::{json, Value};
    use std::path::{Path, PathBuf};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_MARKER: &str = "segwatch-test-index";

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Keep the guard alive for the test.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Write a minimal frontend build into `dir`
    pub fn write_bundle(dir: &Path) {
        std::fs::write(
            dir.join("index.html"),
            format!("<!DOCTYPE html><html><body>{}</body></html>", INDEX_MARKER),
        )
        .expect("Failed to write index.html");
        std::fs::write(dir.join("frontend.js"), "console.log('segwatch');")
            .expect("Failed to write frontend.js");
    }

    pub fn test_config(dist_dir: PathBuf, api_upstream: Option<String>) -> ServerConfig {
        ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            dist_dir,
            api_upstream,
            upstream_timeout_secs: 5,
        }
    }

    /// Create axum app for testing
    pub fn setup_test_app(dist_dir: &Path, api_upstream: Option<String>) -> Router {
        let config = test_config(dist_dir.to_path_buf(), api_upstream);
        let state = AppState::new(config, reqwest::Client::new());
        create_router(state)
    }

    /// Stand-in model service on an ephemeral port. `/dashboard` fails with a
    /// JSON error, `/predict` answers a fixed prediction for well-formed input.
    pub async fn spawn_model_service() -> String {
        let app = Router::new()
            .route(
                "/dashboard",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Database connection lost" })),
                    )
                }),
            )
            .route(
                "/predict",
                post(|Json(body): Json<Value>| async move {
                    match serde_json::from_value::<PredictionRequest>(body) {
                        Ok(request) => (
                            StatusCode::OK,
                            Json(json!({
                                "prediction": {
                                    "segregation_rate": 62.5,
                                    "predicted_households": request.covered_households as f64 * 0.625,
                                    "model_used": format!("Random Forest ({})", request.zone_name),
                                }
                            })),
                        ),
                        Err(e) => (
                            StatusCode::BAD_REQUEST,
                            Json(json!({ "error": format!("Invalid input: {}", e) })),
                        ),
                    }
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub model service");
        let addr = listener.local_addr().expect("Stub has no local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub model service crashed");
        });
        format!("http://{}", addr)
    }

    /// URL of a port nothing listens on
    pub fn unreachable_upstream() -> String {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a port");
        let addr = listener.local_addr().expect("Reserved port has no address");
        drop(listener);
        format!("http://{}", addr)
    }
}
