//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (URL path)
//!     → router.rs (linear scan, first match wins)
//!     → pattern.rs (segment comparison, parameter extraction)
//!     → Return: RouteMatch { page, params, load } or None
//!
//! Table Compilation (at startup):
//!     path templates ("/read/:bookId/:chapterId")
//!     → Compile into static/parameter segments
//!     → Check uniqueness (patterns, parameter names)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - No regex; plain segment comparison
//! - Deterministic: same path always resolves to the same route
//! - An unmatched path is Not Found, never an application error
//! - Load policy (eager for the landing page, deferred otherwise) is
//!   carried as data; it never affects resolution results

pub mod pattern;
pub mod router;

pub use pattern::{PatternError, RoutePattern};
pub use router::{LoadPolicy, Page, Route, RouteMatch, RouteTable, RouteTableError};
