//! API utilities for frontend-backend communication
//!
//! Resolves the API base URL once at start-up and wraps the injected
//! [`HttpClient`] with JSON decoding. Every response is decoded against its
//! documented shape; a mismatch is reported as [`ApiError::Decode`].

use super::http_client::{ApiError, GlooHttpClient, HttpClient};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// Base URL used when neither the page nor the build provides one
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Query parameter that overrides the API base, e.g. `?api=http://10.0.0.5:8000`
pub const API_BASE_QUERY_PARAM: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the page query string and the `PRICE_TRACKER_API_BASE` build variable.
    pub fn from_environment() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::resolve(&search, option_env!("PRICE_TRACKER_API_BASE"))
    }

    /// Page query parameter first, then the build-time value, then the default.
    pub fn resolve(search: &str, build_time: Option<&str>) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let from_query = params
            .get(API_BASE_QUERY_PARAM)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty());
        let from_build = build_time.filter(|v| !v.trim().is_empty());

        Self::new(from_query.or(from_build).unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Configured API access shared through context by the composition root
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Client backed by the browser `fetch`
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(GlooHttpClient))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        log::debug!("GET {} {:?}", url, params);

        let body = self.http.get(&url, params).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// CSV download of the whole price history, generated by the server
    pub fn export_csv_url(&self) -> String {
        self.config.url("/export/csv")
    }
}

/// The [`ApiClient`] provided by `App`
pub fn use_api_client() -> ApiClient {
    expect_context::<ApiClient>()
}
