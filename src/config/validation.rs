//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses, the proxy prefix is absolute, and the
//!   upstream origin is a usable http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("proxy path prefix '{0}' must start with '/'")]
    PathPrefix(String),

    #[error("invalid upstream origin '{origin}': {reason}")]
    UpstreamOrigin { origin: String, reason: String },

    #[error("upstream origin '{0}' must use http or https")]
    UpstreamScheme(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if !config.proxy.path_prefix.starts_with('/') {
        errors.push(ValidationError::PathPrefix(
            config.proxy.path_prefix.clone(),
        ));
    }

    match Url::parse(&config.proxy.origin) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UpstreamScheme(url.to_string())),
        Err(e) => errors.push(ValidationError::UpstreamOrigin {
            origin: config.proxy.origin.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
