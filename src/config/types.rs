use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback backend address when nothing else provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (scheme + host + port), without `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// QR screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrConfig {
    /// Seconds between automatic QR refreshes (default: 10).
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
}

/// Gallery screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Public web address used to build share links (`<base>/movies/<id>`).
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    option_env!("MOVIEQR_API_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_refresh_interval() -> u64 {
    10
}

fn default_share_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: default_refresh_interval(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
