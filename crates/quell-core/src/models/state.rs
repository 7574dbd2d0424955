use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::unix_seconds;
use crate::config::defaults;
use crate::constants::MIN_MAX_EPOCH_EXCLUSIVE;
use crate::errors::{QuellError, QuellResult};

/// Per-entity suppression bookkeeping.
///
/// Owned and persisted by the caller. The evaluator only reads it; the
/// helpers below return a new value for the next cycle instead of mutating
/// anything behind the caller's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionState {
    /// Anomalies seen since the last report. `None` means no baseline yet.
    pub report_count: Option<u64>,
    /// Length of one suppression cycle, in hours. Must be > 0.
    pub window_size_hours: f64,
    /// Unix seconds of the last emitted report; 0 means never reported.
    pub last_report_timestamp: f64,
    /// Windows after which the time-based term saturates. Must be > 1.
    pub max_epoch: u32,
}

impl SuppressionState {
    /// Fresh state with no baseline and no previous report.
    pub fn new(window_size_hours: f64, max_epoch: u32) -> Self {
        Self {
            report_count: None,
            window_size_hours,
            last_report_timestamp: 0.0,
            max_epoch,
        }
    }

    /// Check `max_epoch > 1` and `window_size_hours > 0`.
    pub fn validate(&self) -> QuellResult<()> {
        if self.max_epoch <= MIN_MAX_EPOCH_EXCLUSIVE {
            return Err(QuellError::Configuration {
                field: "max_epoch",
                value: self.max_epoch.to_string(),
                expected: "> 1",
            });
        }
        // Written negated so NaN is rejected too.
        if !(self.window_size_hours > 0.0) {
            return Err(QuellError::Configuration {
                field: "window_size_hours",
                value: self.window_size_hours.to_string(),
                expected: "> 0",
            });
        }
        Ok(())
    }

    /// The anomaly count, or `InvalidState` when no baseline exists.
    pub fn require_report_count(&self) -> QuellResult<u64> {
        self.report_count.ok_or_else(|| QuellError::InvalidState {
            reason: "report_count is unset; initialise it to 0 before the first evaluation"
                .to_string(),
        })
    }

    /// Same state with the baseline set to 0 if it was missing.
    pub fn with_baseline(mut self) -> Self {
        self.report_count.get_or_insert(0);
        self
    }

    /// Same state with `count` more anomalies recorded.
    pub fn record_anomalies(mut self, count: u64) -> Self {
        let current = self.report_count.unwrap_or(0);
        self.report_count = Some(current.saturating_add(count));
        self
    }

    /// State for the cycle that starts with a report emitted at `now`.
    pub fn after_report(&self, now: DateTime<Utc>) -> Self {
        Self {
            report_count: Some(0),
            window_size_hours: self.window_size_hours,
            last_report_timestamp: unix_seconds(now),
            max_epoch: self.max_epoch,
        }
    }

    /// Whether a report has ever been emitted for this entity.
    pub fn has_reported(&self) -> bool {
        self.last_report_timestamp > 0.0
    }
}

impl Default for SuppressionState {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_WINDOW_SIZE_HOURS,
            defaults::DEFAULT_MAX_EPOCH,
        )
    }
}
