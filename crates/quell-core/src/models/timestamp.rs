use chrono::{DateTime, Utc};

/// Unix seconds as `f64`, keeping sub-second precision.
pub fn unix_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1_000_000_000.0
}
