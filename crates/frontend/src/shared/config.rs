//! Client configuration.
//!
//! Defaults are embedded in the bundle. A full TOML document stored under
//! `localStorage["app_config"]` replaces them, which is how a developer points a
//! running build at another backend.

use serde::Deserialize;
use std::cell::OnceCell;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub booking: BookingConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute backend URL; empty means "same host as the page"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    /// A finalize request without an answer after this long counts as failed
    pub finalize_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

const CONFIG_STORAGE_KEY: &str = "app_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[booking]
finalize_timeout_ms = 30000

[log]
level = "debug"
"#;

thread_local! {
    static CURRENT: OnceCell<AppConfig> = const { OnceCell::new() };
}

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Stored override if present and valid, embedded defaults otherwise
    pub fn load() -> Self {
        if let Some(stored) = stored_override() {
            match Self::parse(&stored) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring stored config override: {}", e),
            }
        }
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("{}", e);
            Self::fallback()
        })
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            booking: BookingConfig {
                finalize_timeout_ms: 30_000,
            },
            log: LogConfig::default(),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log.level.parse().unwrap_or(log::Level::Info)
    }

    /// Backend base URL without a trailing slash
    pub fn api_base(&self) -> String {
        let configured = self.api.base_url.trim().trim_end_matches('/');
        if configured.is_empty() {
            crate::shared::api_utils::window_api_base(self.api.port)
        } else {
            configured.to_string()
        }
    }
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Configuration loaded once per page
pub fn current() -> AppConfig {
    CURRENT.with(|cell| cell.get_or_init(AppConfig::load).clone())
}
