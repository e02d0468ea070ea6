//! HTTP client for the Giphy API.

use crate::mapper::{RawLookupEnvelope, RawSearchEnvelope};
use crate::provider::GifProvider;
use async_trait::async_trait;
use gifvault_config::GiphyConfig;
use gifvault_core::{Gif, GifFilter, GifId, GifPage, GifVaultError, GifVaultResult};
use reqwest::Client;
use tracing::debug;

/// Raw HTTP client for the Giphy search/lookup API.
///
/// Performs no caching; wrap it in [`crate::CachedGifClient`] for the
/// read-through cache.
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    /// Creates a new client from provider configuration.
    pub fn new(config: &GiphyConfig) -> GifVaultResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GifVaultError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Creates a client with a custom `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, config: &GiphyConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-success provider response into a provider error.
    ///
    /// The provider reports its error message at `meta.msg`; when the body
    /// carries no parsable message, "Unknown error" stands in.
    async fn error_from_response(response: reqwest::Response) -> GifVaultError {
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.pointer("/meta/msg")
                    .and_then(|msg| msg.as_str())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| "Unknown error".to_string());

        GifVaultError::provider(message, status)
    }
}

#[async_trait]
impl GifProvider for GiphyClient {
    async fn search(&self, filter: &GifFilter) -> GifVaultResult<GifPage> {
        debug!("Giphy search: q='{}' limit={} offset={}", filter.q, filter.limit, filter.offset);

        let response = self
            .client
            .get(self.url("/search"))
            .query(&[
                ("q", filter.q.clone()),
                ("limit", filter.limit.to_string()),
                ("offset", filter.offset.to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| GifVaultError::Internal(format!("HTTP error: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GifVaultError::Internal(format!("HTTP error: {}", e)))?;

        let envelope: RawSearchEnvelope = serde_json::from_slice(&body)
            .map_err(|e| GifVaultError::Mapping(format!("Malformed search response: {}", e)))?;

        Ok(GifPage::from(envelope))
    }

    async fn get_by_id(&self, id: &GifId) -> GifVaultResult<Gif> {
        debug!("Giphy lookup: id='{}'", id);

        let response = self
            .client
            .get(self.url(&format!("/{}", id)))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GifVaultError::Internal(format!("HTTP error: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GifVaultError::Internal(format!("HTTP error: {}", e)))?;

        let envelope: RawLookupEnvelope = serde_json::from_slice(&body)
            .map_err(|e| GifVaultError::Mapping(format!("Malformed lookup response: {}", e)))?;

        Ok(Gif::from(envelope.data))
    }
}
