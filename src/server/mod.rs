//! Development server subsystem.
//!
//! # Data Flow
//! ```text
//! Browser request
//!     → dev.rs (Axum setup, dispatch on path prefix)
//!         path under /api → forward.rs (proxy to upstream origin,
//!                            Host rewrite, one log line per request)
//!         any other path  → route table → SPA shell, or 404
//! ```
//!
//! # Design Decisions
//! - Mirrors the deployed shape: the front-end and its API share one
//!   origin, so page code can use the relative `/api` base URL locally
//! - Upstream failure maps to 502; the proxy adds no retry
//! - History fallback serves the same shell for every resolvable path;
//!   unmatched paths get the platform-default 404

pub mod dev;
pub mod forward;

pub use dev::{DevServer, DevServerError};
