use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod fixtures;
pub mod types;

pub use types::{HistoryPoint, ModuleInfo, ModuleStaticData, Reading};

/// Why a fetch failed. The sync engine treats every variant the same way
/// (keep the last good snapshot); the split exists for logs and for callers
/// that want to distinguish a dead backend from a misbehaving one.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Network {
        path: String,
        source: reqwest::Error,
    },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

/// The interface the sync engine polls. Split out from the HTTP client so
/// tests can drive the engine with a scripted source.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the current reading.
    async fn current(&self) -> Result<Reading, ApiError>;

    /// Fetch up to `limit` historical points, most recent last.
    async fn history(&self, limit: usize) -> Result<Vec<HistoryPoint>, ApiError>;
}

/// HTTP client for the transceiver REST backend.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `path` and decode the JSON body. Any non-2xx status is a
    /// failure regardless of what the body says.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Network {
                path: path.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|source| ApiError::Network {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// GET `path` with the development fixture fallback applied on failure.
    async fn get_with_fallback<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        match self.get_json(path).await {
            Ok(value) => Ok(value),
            Err(err) => fixtures::resolve(path, err),
        }
    }

    /// Static module identity (the A0h page). Fetched on demand by the info
    /// view; there is no fixture for it, so failures always propagate.
    pub async fn static_info(&self) -> Result<ModuleStaticData, ApiError> {
        self.get_json("/api/static").await
    }
}

#[async_trait]
impl TelemetrySource for ApiClient {
    async fn current(&self) -> Result<Reading, ApiError> {
        self.get_with_fallback("/api/v1/current").await
    }

    async fn history(&self, limit: usize) -> Result<Vec<HistoryPoint>, ApiError> {
        self.get_with_fallback(&format!("/api/v1/history?limit={limit}"))
            .await
    }
}
