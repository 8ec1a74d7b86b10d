//! The HTTP API client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::schema::ClientConfig;

/// Fixed request timeout. Not configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Single point of outbound HTTP communication to the backend service.
///
/// Constructed once at startup and shared (it is cheap to clone; clones
/// share the same connection pool). The base URL is resolved exactly once
/// here and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client bound to the configured base URL and the fixed
    /// timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.resolved_base_url(),
        })
    }

    /// The base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON resource, returning only the decoded body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.http.get(self.url(path))).await
    }

    /// POST a JSON payload, returning only the decoded body.
    pub async fn post<T, B>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(self.http.post(self.url(path)).json(payload))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Common send/unwrap path. Non-2xx statuses are failures; on success
    /// the caller gets the decoded body, never the response envelope.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| self.reject(e))?;
        let response = response.error_for_status().map_err(|e| self.reject(e))?;
        response.json::<T>().await.map_err(|e| self.reject(e))
    }

    /// One diagnostic entry per failed request, then the original error
    /// is handed back unchanged.
    fn reject(&self, error: reqwest::Error) -> ApiError {
        tracing::error!(error = %error, "api request failed");
        ApiError::Request(error)
    }
}
