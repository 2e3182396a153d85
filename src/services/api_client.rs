// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: builds requests, checks status, decodes JSON
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{SourcesResponse, StoriesRequest, StoriesResponse, TokenRequest};
use crate::utils::{GOOGLE_CALLBACK_PATH, SOURCES_PATH, STORIES_PATH};

/// Status and body of a response, for callers that interpret errors themselves
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_url.as_str())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One page of stories
    pub async fn fetch_stories(&self, request: &StoriesRequest) -> Result<StoriesResponse, ApiError> {
        let url = self.endpoint(STORIES_PATH);
        log::debug!(
            "📰 POST {} (offset {}, page_size {}, {} sources)",
            url,
            request.offset,
            request.page_size,
            request.source_ids.len()
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_json(response).await
    }

    /// Full source catalog
    pub async fn fetch_sources(&self) -> Result<SourcesResponse, ApiError> {
        let url = self.endpoint(SOURCES_PATH);
        log::debug!("📚 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_json(response).await
    }

    /// Sends a Google authorization code to the backend. The body is returned
    /// as text whatever the status, the auth service decides what it means.
    pub async fn exchange_google_code(&self, code: &str) -> Result<RawResponse, ApiError> {
        let url = self.endpoint(GOOGLE_CALLBACK_PATH);
        log::info!("🔐 Exchanging authorization code");

        let body = TokenRequest { code: code.to_string() };
        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::with_base_url("https://api.example.org/");
        assert_eq!(client.endpoint(STORIES_PATH), "https://api.example.org/api/news/stories");
        assert_eq!(
            client.endpoint(GOOGLE_CALLBACK_PATH),
            "https://api.example.org/api/auth/google/callback"
        );
    }
}
