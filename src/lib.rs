//! Client-side core for a web novel reading platform.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                 NOVEL FRONT                   │
//!                       │                                               │
//!   Browser navigation  │  ┌──────────┐        ┌────────────────────┐  │
//!   ────────────────────┼─▶│ routing  │        │  page components   │  │
//!                       │  │  table   │───────▶│  (external, out of │  │
//!                       │  └──────────┘        │   this crate)      │  │
//!                       │                      └─────────┬──────────┘  │
//!                       │                                │             │
//!                       │                                ▼             │
//!   Backend service     │  ┌──────────┐        ┌────────────────────┐  │
//!   ◀───────────────────┼──│   api    │◀───────│   data fetching    │  │
//!                       │  │  client  │        └────────────────────┘  │
//!                       │  └──────────┘                                │
//!                       │                                               │
//!                       │  ┌────────────────────────────────────────┐  │
//!                       │  │      dev server (binary only)           │  │
//!                       │  │  /api/* → upstream proxy, else SPA      │  │
//!                       │  └────────────────────────────────────────┘  │
//!                       └──────────────────────────────────────────────┘
//! ```
//!
//! The crate owns no domain data. Its two runtime pieces are the route
//! table (URL path → page identifier, with `:named` parameters) and the
//! API client (JSON over HTTP with a fixed timeout). The dev server
//! reproduces the production deployment shape locally: API calls under
//! `/api` are forwarded to a configured upstream origin, every other path
//! falls back to the SPA shell.

// Core subsystems
pub mod api;
pub mod config;
pub mod routing;
pub mod server;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use api::ApiClient;
pub use config::AppConfig;
pub use routing::{Page, RouteMatch, RouteTable};
pub use server::DevServer;
