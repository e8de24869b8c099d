//! Fetch error taxonomy.
//!
//! Every variant ends up as one fixed user-facing message per screen;
//! the details only reach the diagnostic log.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent, or timed out.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status.
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not in the expected shape.
    #[error("Unexpected response body from '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Image bytes or data URL could not be decoded.
    #[error("Invalid image: {0}")]
    Image(String),
}

/// Coarse grouping used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Parse,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Parse => "parse",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } | FetchError::Status { .. } => FetchErrorKind::Network,
            FetchError::Parse { .. } | FetchError::Image(_) => FetchErrorKind::Parse,
        }
    }
}
