//! Base URL selection for backend calls.

/// Port `trunk serve` hosts the frontend on during development.
pub const FRONTEND_DEV_PORT: &str = "8080";

/// Loopback address of the locally running model service.
pub const LOCAL_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Development,
    Production,
}

impl ExecutionMode {
    /// Debug builds are the ones `trunk serve` produces.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            ExecutionMode::Development
        } else {
            ExecutionMode::Production
        }
    }
}

/// Returns the prefix for every API path.
///
/// An empty base means same-origin requests, which is how the bundled
/// deployment reaches the API.
pub fn resolve_api_base(page_port: &str, mode: ExecutionMode) -> String {
    if mode == ExecutionMode::Development || page_port == FRONTEND_DEV_PORT {
        tracing::debug!(page_port, ?mode, "Using local backend at {}", LOCAL_BACKEND_URL);
        LOCAL_BACKEND_URL.to_string()
    } else {
        tracing::debug!(page_port, ?mode, "Using same-origin API");
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_mode_uses_loopback() {
        assert_eq!(
            resolve_api_base("443", ExecutionMode::Development),
            "http://127.0.0.1:5000"
        );
        assert_eq!(
            resolve_api_base("", ExecutionMode::Development),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_dev_port_uses_loopback_in_production_build() {
        assert_eq!(
            resolve_api_base("8080", ExecutionMode::Production),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_bundled_deployment_is_same_origin() {
        assert_eq!(resolve_api_base("", ExecutionMode::Production), "");
        assert_eq!(resolve_api_base("3000", ExecutionMode::Production), "");
        assert_eq!(resolve_api_base("5000", ExecutionMode::Production), "");
    }
}
