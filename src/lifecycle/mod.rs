//! # Process Lifecycle
//!
//! Start-up concerns shared by every entry point. The pattern modules are pure
//! in-memory computation, so the only thing to set up is observability.
//!
//! - [`setup_tracing`] - Installs the `tracing` subscriber, filtered by `RUST_LOG`

pub mod tracing;

pub use self::tracing::*;
