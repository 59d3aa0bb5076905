use std::sync::Arc;

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server settings
    pub config: Arc<ServerConfig>,
    /// Client used to reach the model service
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}
