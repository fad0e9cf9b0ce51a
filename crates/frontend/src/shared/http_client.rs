//! HTTP capability used by every view
//!
//! Views never talk to the network directly: they go through an [`HttpClient`]
//! held by [`ApiClient`](super::api_utils::ApiClient), so tests can swap in a fake.

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

/// Everything that can go wrong while fetching. The UI collapses all variants
/// into a single "fetch failed" message; the variant only reaches the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("response did not contain {0}")]
    MissingData(&'static str),
}

#[async_trait(?Send)]
pub trait HttpClient: Send + Sync {
    /// GET `url` with `params` appended as a query string, returning the body
    /// of a 2xx response.
    async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, ApiError>;
}

/// Browser implementation on top of `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str, params: &[(&'static str, String)]) -> Result<String, ApiError> {
        let response = Request::get(url)
            .query(params.iter().map(|(name, value)| (*name, value.as_str())))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}
