use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Scoring tunables supplied per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionParams {
    /// Threshold the combined score must exceed to trigger a report.
    pub significance: f64,
    /// Expected requests per hour; normalises the anomaly count into a rate.
    pub hourly_request_rate: f64,
    /// Share of a window's requests that may be anomalous before a report is forced.
    /// `None` defers to the evaluator's configured default.
    pub target_suppression_fraction: Option<f64>,
}

impl SuppressionParams {
    /// Fill in the target fraction, preferring the explicit value.
    pub fn resolve(&self, default_fraction: f64) -> ResolvedParams {
        ResolvedParams {
            significance: self.significance,
            hourly_request_rate: self.hourly_request_rate,
            target_suppression_fraction: self
                .target_suppression_fraction
                .unwrap_or(default_fraction),
        }
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.target_suppression_fraction = Some(fraction);
        self
    }
}

impl Default for SuppressionParams {
    fn default() -> Self {
        Self {
            significance: defaults::DEFAULT_SIGNIFICANCE,
            hourly_request_rate: defaults::DEFAULT_HOURLY_REQUEST_RATE,
            target_suppression_fraction: None,
        }
    }
}

/// Tunables with every value pinned down. This is what the formula consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParams {
    pub significance: f64,
    pub hourly_request_rate: f64,
    pub target_suppression_fraction: f64,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        SuppressionParams::default().resolve(defaults::DEFAULT_TARGET_SUPPRESSION_FRACTION)
    }
}
