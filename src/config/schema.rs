//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files, with defaults matching the standard local dev setup.

use serde::{Deserialize, Serialize};

/// Base URL used when no override is configured.
///
/// A relative prefix: in the deployed setup the backend is served from the
/// same origin as the front-end, so requests go to `/api/...` on that
/// origin (locally, the dev server's proxy fills this role).
pub const DEFAULT_BASE_URL: &str = "/api";

/// Root configuration for the front-end core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Dev server settings (bind address).
    pub server: ServerConfig,

    /// API client settings (base URL override).
    pub client: ClientConfig,

    /// Dev proxy upstream settings.
    pub proxy: UpstreamConfig,
}

/// Dev server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5173").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5173".to_string(),
        }
    }
}

/// API client configuration.
///
/// The request timeout is deliberately not configurable; it is a fixed
/// constant (see [`crate::api::REQUEST_TIMEOUT`]).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL override. Absent or empty means [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Resolve the effective base URL.
    ///
    /// A non-empty override wins; anything else falls back to the relative
    /// `/api` prefix. Resolution happens once, at client construction.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Upstream target for the dev proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Path prefix that is forwarded upstream instead of served as SPA.
    pub path_prefix: String,

    /// Upstream origin (scheme + authority) requests are forwarded to.
    pub origin: String,

    /// Rewrite the Host header to the upstream authority (cross-origin
    /// masking). When false the original Host header is preserved.
    pub change_origin: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/api".to_string(),
            origin: "http://127.0.0.1:9000".to_string(),
            change_origin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_working_dev_setup() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:5173");
        assert_eq!(config.proxy.path_prefix, "/api");
        assert!(config.proxy.change_origin);
        assert!(config.client.base_url.is_none());
    }

    #[test]
    fn base_url_falls_back_when_absent_or_empty() {
        assert_eq!(ClientConfig::default().resolved_base_url(), "/api");

        let empty = ClientConfig {
            base_url: Some(String::new()),
        };
        assert_eq!(empty.resolved_base_url(), "/api");
    }

    #[test]
    fn base_url_override_wins() {
        let config = ClientConfig {
            base_url: Some("https://novel.example.com/api".to_string()),
        };
        assert_eq!(
            config.resolved_base_url(),
            "https://novel.example.com/api"
        );
    }
}
