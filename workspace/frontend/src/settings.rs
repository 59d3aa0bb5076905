use client::{ExecutionMode, resolve_api_base};
use log::Level;
use web_sys::window;

const LOG_LEVEL_KEY: &str = "segwatch_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Port the page was served from ("" for the scheme default)
    pub page_port: String,

    /// Build flavour; debug builds come from `trunk serve`
    pub mode: ExecutionMode,

    /// Prefix for every API path, empty for same-origin requests
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let mode = ExecutionMode::current();
        Self {
            page_port: String::new(),
            mode,
            api_base: resolve_api_base("", mode),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            let location = window.location();

            if let Ok(port) = location.port() {
                settings.page_port = port;
            }

            if let Ok(hostname) = location.hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }
            }
        }

        settings.api_base = resolve_api_base(&settings.page_port, settings.mode);
        settings
    }

    /// Get the base API URL
    pub fn api_base_url(&self) -> String {
        self.api_base.clone()
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
