//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the API base URL.
///
/// Read once at load time; absent or empty means "use the relative
/// `/api` prefix".
pub const BASE_URL_ENV: &str = "NOVEL_API_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load configuration from an optional file, falling back to defaults,
/// then apply the environment override.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(value) = env::var(BASE_URL_ENV) {
        if !value.is_empty() {
            config.client.base_url = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config_with_defaults() {
        let config = parse_config(
            r#"
            [proxy]
            origin = "https://novelapi.example.com:2096"
            "#,
        )
        .unwrap();

        assert_eq!(config.proxy.origin, "https://novelapi.example.com:2096");
        assert_eq!(config.proxy.path_prefix, "/api");
        assert_eq!(config.server.bind_address, "127.0.0.1:5173");
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.client.resolved_base_url(), "/api");
    }

    #[test]
    fn invalid_config_reports_validation() {
        let err = parse_config(
            r#"
            [server]
            bind_address = "nope"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn unparseable_toml_reports_parse_error() {
        let err = parse_config("[server").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_override_takes_effect() {
        // The only test touching this variable, so no cross-test race.
        env::set_var(BASE_URL_ENV, "https://api.override.example");
        let config = load_or_default(None).unwrap();
        env::remove_var(BASE_URL_ENV);

        assert_eq!(
            config.client.resolved_base_url(),
            "https://api.override.example"
        );
    }

    #[test]
    fn loads_from_file() {
        let path = env::temp_dir().join("novel-front-loader-test.toml");
        fs::write(&path, "[client]\nbase_url = \"http://127.0.0.1:9000\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.client.resolved_base_url(),
            "http://127.0.0.1:9000"
        );

        fs::remove_file(&path).unwrap();
    }
}
