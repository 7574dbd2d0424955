//! # quell-observability
//!
//! Tracing subscriber setup and the structured events emitted around
//! suppression decisions.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
