//! API client subsystem.
//!
//! # Data Flow
//! ```text
//! page component (external)
//!     → client.rs (join base URL, send, fixed 10s timeout)
//!     → backend service
//!     → client.rs (non-2xx → failure, decode JSON body)
//!     → Return: body value, or ApiError carrying the original error
//! ```
//!
//! # Design Decisions
//! - One reusable client, configured once; base URL is immutable after
//!   construction
//! - Callers receive the response body only, never the envelope
//! - Every failure is logged exactly once at this boundary and then
//!   propagated unchanged; no retry, no fallback, no caching
//! - Failure modes (network, timeout, non-2xx, decode) are deliberately
//!   not distinguished for callers

pub mod client;
pub mod error;

pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use error::ApiError;
