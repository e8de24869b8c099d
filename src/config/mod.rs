//! Configuration: file format, loading, validation and CLI overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    ApiConfig, Config, GalleryConfig, LoggingConfig, QrConfig, DEFAULT_API_BASE_URL,
};
