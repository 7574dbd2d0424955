use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MIN_MAX_EPOCH_EXCLUSIVE, TARGET_FRACTION_ENV_VAR};
use crate::errors::ConfigError;
use crate::models::{SuppressionParams, SuppressionState};

/// Suppression scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    /// Threshold the combined score must exceed.
    pub significance: f64,
    /// Expected requests per hour.
    pub hourly_request_rate: f64,
    /// Fallback target suppression fraction when neither the call nor `PERCENT` sets one.
    pub target_suppression_fraction: f64,
    /// Window size given to newly created states (hours).
    pub window_size_hours: f64,
    /// Max epoch given to newly created states.
    pub max_epoch: u32,
}

impl SuppressionConfig {
    /// Per-call tunables, leaving the fraction to the evaluator's default.
    pub fn params(&self) -> SuppressionParams {
        SuppressionParams {
            significance: self.significance,
            hourly_request_rate: self.hourly_request_rate,
            target_suppression_fraction: None,
        }
    }

    /// A fresh state for a newly monitored entity.
    pub fn new_state(&self) -> SuppressionState {
        SuppressionState::new(self.window_size_hours, self.max_epoch)
    }

    /// Default fraction from the `PERCENT` environment variable, else the configured value.
    pub fn resolve_target_fraction(&self) -> Result<f64, ConfigError> {
        self.resolve_target_fraction_from(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::resolve_target_fraction`] with an injected lookup.
    pub fn resolve_target_fraction_from<F>(&self, lookup: F) -> Result<f64, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        target_fraction_from(self.target_suppression_fraction, lookup)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_size_hours > 0.0) {
            return Err(out_of_range("suppression.window_size_hours", self.window_size_hours, "> 0"));
        }
        if self.max_epoch <= MIN_MAX_EPOCH_EXCLUSIVE {
            return Err(out_of_range("suppression.max_epoch", self.max_epoch, "> 1"));
        }
        if !(self.hourly_request_rate >= 0.0) || !self.hourly_request_rate.is_finite() {
            return Err(out_of_range(
                "suppression.hourly_request_rate",
                self.hourly_request_rate,
                "a finite value >= 0",
            ));
        }
        if !(self.target_suppression_fraction >= 0.0) || !self.target_suppression_fraction.is_finite() {
            return Err(out_of_range(
                "suppression.target_suppression_fraction",
                self.target_suppression_fraction,
                "a finite value >= 0",
            ));
        }
        if !self.significance.is_finite() {
            return Err(out_of_range("suppression.significance", self.significance, "a finite value"));
        }
        Ok(())
    }
}

/// `PERCENT` as looked up by `lookup`, else `fallback`. An unparsable value is an error.
pub fn target_fraction_from<F>(fallback: f64, lookup: F) -> Result<f64, ConfigError>
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(TARGET_FRACTION_ENV_VAR) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: TARGET_FRACTION_ENV_VAR.to_string(),
                value: raw,
            }),
        None => Ok(fallback),
    }
}

fn out_of_range(field: &str, value: impl ToString, expected: &str) -> ConfigError {
    ConfigError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            significance: defaults::DEFAULT_SIGNIFICANCE,
            hourly_request_rate: defaults::DEFAULT_HOURLY_REQUEST_RATE,
            target_suppression_fraction: defaults::DEFAULT_TARGET_SUPPRESSION_FRACTION,
            window_size_hours: defaults::DEFAULT_WINDOW_SIZE_HOURS,
            max_epoch: defaults::DEFAULT_MAX_EPOCH,
        }
    }
}
