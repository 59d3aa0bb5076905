use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::schemas::AppState;

/// Resolved server settings, built from CLI flags and their env fallbacks.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Directory the built frontend lives in
    pub dist_dir: PathBuf,
    /// Model service base URL, without a trailing slash
    pub api_upstream: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn has_bundle(&self) -> bool {
        self.index_path().is_file()
    }
}

/// Initialize application state
pub fn initialize_app_state(config: ServerConfig) -> Result<AppState> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;

    tracing::debug!(
        "Upstream client ready (timeout {}s)",
        config.upstream_timeout_secs
    );

    Ok(AppState::new(config, http))
}
