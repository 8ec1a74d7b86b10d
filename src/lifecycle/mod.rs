//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - One watch flag coordinates shutdown; the dev server and
//!   integration tests hold signal handles on it
//! - A trigger is never missed: handles obtained after the fact still
//!   resolve
//! - Ctrl-C is handled inside the server loop in addition to the signal

pub mod shutdown;

pub use shutdown::{Shutdown, ShutdownSignal};
