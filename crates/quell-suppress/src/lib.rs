//! # quell-suppress
//!
//! Anomaly-report suppression scoring.
//! Two signals are blended: anomaly pressure (count normalised by expected
//! traffic) and the number of fully elapsed windows since the last report.
//! A report is due once their sum exceeds the significance bar.

pub mod decision;
pub mod engine;
pub mod factors;
pub mod formula;

pub use decision::SuppressionDecision;
pub use engine::SuppressionEngine;
pub use factors::SuppressionContext;
pub use engine::FractionSource;
pub use formula::{evaluate, evaluate_with_default, evaluate_with_lookup, ScoreBreakdown};
