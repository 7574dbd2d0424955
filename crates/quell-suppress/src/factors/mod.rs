pub mod anomaly;
pub mod elapsed;

use chrono::{DateTime, Utc};

/// Context needed to score a suppression state.
#[derive(Debug, Clone)]
pub struct SuppressionContext {
    /// Current timestamp.
    pub now: DateTime<Utc>,
}

impl SuppressionContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// `now` as Unix seconds.
    pub fn now_secs(&self) -> f64 {
        quell_core::models::unix_seconds(self.now)
    }
}

impl Default for SuppressionContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}
