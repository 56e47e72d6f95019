//! HTTP client for the stations backend.

use serde::de::DeserializeOwned;

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::{Station, StationDraft, StationId};

use super::error::ClientError;
use super::repository::StationRepository;

/// How much of an unparsable body is kept in the error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Configuration for the stations client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL of the stations collection
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a config pointing at the given collection URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Client for the stations REST API.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new stations client.
    pub fn new(config: StationClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The collection URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: StationId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Check the status and decode the JSON body.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ClientError::Json {
            message: format!(
                "{e} (body: {})",
                body.chars().take(BODY_EXCERPT_CHARS).collect::<String>()
            ),
        })
    }
}

impl StationRepository for StationClient {
    async fn list_all(&self) -> Result<Vec<Station>, ClientError> {
        tracing::debug!(url = %self.base_url, "GET stations");
        let response = self.http.get(&self.base_url).send().await?;
        Self::read_json(response).await
    }

    async fn get_by_id(&self, id: StationId) -> Result<Station, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET station");
        let response = self.http.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn create(&self, draft: &StationDraft) -> Result<Station, ClientError> {
        tracing::debug!(url = %self.base_url, name = %draft.name, "POST station");
        let response = self.http.post(&self.base_url).json(draft).send().await?;
        Self::read_json(response).await
    }

    async fn update(&self, id: StationId, draft: &StationDraft) -> Result<Station, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(%url, name = %draft.name, "PUT station");
        let response = self.http.put(&url).json(draft).send().await?;
        Self::read_json(response).await
    }

    async fn delete_by_id(&self, id: StationId) -> Result<bool, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE station");
        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(%id, status = status.as_u16(), "backend refused delete");
        }

        Ok(status.is_success())
    }
}
