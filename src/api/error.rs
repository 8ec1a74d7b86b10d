//! Error type for the API client.
//!
//! # Design
//! A single undifferentiated "request failed" kind. The page components
//! that consume this client decide user-visible behavior from the fact of
//! failure alone, so timeout vs. non-2xx vs. network error is not split
//! into variants; the original [`reqwest::Error`] is carried unmodified
//! for anything that does want to inspect it.

use thiserror::Error;

/// Errors returned by [`crate::api::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed: network error, timeout, non-2xx status, or an
    /// undecodable body. Wraps the underlying error unchanged.
    #[error("api request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status that caused the failure, when there was one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Request(e) => e.status(),
        }
    }
}
