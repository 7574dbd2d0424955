/// Quell system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one hour. Window sizes are configured in hours, timestamps are seconds.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Added to the gain denominator so a zero rate, window, or fraction never divides by zero.
pub const GAIN_EPSILON: f64 = 0.001;

/// Exclusive lower bound for `max_epoch`.
pub const MIN_MAX_EPOCH_EXCLUSIVE: u32 = 1;

/// Environment variable carrying the default target suppression fraction.
pub const TARGET_FRACTION_ENV_VAR: &str = "PERCENT";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "QUELL_LOG";
