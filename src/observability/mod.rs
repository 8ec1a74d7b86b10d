//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Filter configurable through the environment, with a crate default
//! - The API client logs each failed request exactly once; the dev
//!   server logs one line per proxied request

pub mod logging;
