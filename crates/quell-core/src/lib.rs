//! # quell-core
//!
//! Foundation crate for Quell anomaly-report suppression.
//! Defines the suppression state, evaluator trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QuellConfig;
pub use errors::{QuellError, QuellResult};
pub use models::{SuppressionParams, SuppressionState, Verdict};
