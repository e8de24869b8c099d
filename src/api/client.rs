use base64::Engine;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::FetchError;
use super::types::{CollectionId, Movie, MoviesResponse, QrCode};
use crate::config::Config;

/// HTTP client for the MovieQR backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_base(),
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/api/qr`
    pub async fn fetch_qr(&self) -> Result<QrCode, FetchError> {
        let url = format!("{}/api/qr", self.base_url);
        self.get_json(&url).await
    }

    /// `GET {base}/api/movies/{id}`, with `id` inserted verbatim.
    pub async fn fetch_movies(&self, collection: &CollectionId) -> Result<Vec<Movie>, FetchError> {
        let url = format!("{}/api/movies/{}", self.base_url, collection.as_str());
        let response: MoviesResponse = self.get_json(&url).await?;
        Ok(response.movies)
    }

    /// Raw bytes of the image at `location`.
    ///
    /// `data:` URLs are decoded locally. Relative paths are resolved
    /// against the backend base URL.
    pub async fn fetch_image(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        if location.starts_with("data:") {
            return decode_data_url(location);
        }

        let url = self.resolve(location)?;
        let response = self.send(&url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        Ok(bytes.to_vec())
    }

    fn resolve(&self, location: &str) -> Result<String, FetchError> {
        if let Ok(url) = Url::parse(location) {
            return Ok(url.to_string());
        }
        let base = Url::parse(&format!("{}/", self.base_url))
            .map_err(|e| FetchError::Image(format!("invalid base URL: {}", e)))?;
        base.join(location)
            .map(|url| url.to_string())
            .map_err(|e| FetchError::Image(format!("invalid image URL '{}': {}", location, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.send(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Decodes `data:[<mime>];base64,<payload>`.
fn decode_data_url(location: &str) -> Result<Vec<u8>, FetchError> {
    let rest = &location["data:".len()..];
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| FetchError::Image("data URL has no payload".to_string()))?;
    if !meta.ends_with(";base64") {
        return Err(FetchError::Image(
            "only base64 data URLs are supported".to_string(),
        ));
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| FetchError::Image(format!("bad base64 payload: {}", e)))
}
