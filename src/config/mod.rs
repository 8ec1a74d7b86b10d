//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply env override)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → dev server + API client construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reconfiguration
//! - All fields have defaults so no config file is required for local dev
//! - The API base URL override is the single recognized environment
//!   setting, read once at load time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError, BASE_URL_ENV};
pub use schema::{AppConfig, ClientConfig, ServerConfig, UpstreamConfig, DEFAULT_BASE_URL};
