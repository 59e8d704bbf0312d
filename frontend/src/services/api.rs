use std::time::Duration;

use async_trait::async_trait;
use shared::{SessionBucket, SessionQueryKey};
use tracing::{debug, info};

use crate::error::ApiError;

/// Path of the session listing endpoint, relative to the base URL
pub const SESSIONS_PATH: &str = "/customer/get_sessions";

/// Anything that can answer a session query
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn get_sessions(&self, key: &SessionQueryKey) -> Result<Vec<SessionBucket>, ApiError>;
}

/// API client for the session listing endpoint
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client with a custom base URL and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a query key
    pub fn sessions_url(&self, key: &SessionQueryKey) -> String {
        format!("{}{}/{}", self.base_url, SESSIONS_PATH, key)
    }
}

#[async_trait]
impl SessionSource for ApiClient {
    async fn get_sessions(&self, key: &SessionQueryKey) -> Result<Vec<SessionBucket>, ApiError> {
        let url = self.sessions_url(key);
        debug!(%url, "requesting sessions");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Network {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let buckets: Vec<SessionBucket> =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;

        info!(key = %key, buckets = buckets.len(), "✅ sessions received");
        Ok(buckets)
    }
}
