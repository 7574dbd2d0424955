// Single source of truth for all default values.

// --- Suppression scoring ---
pub const DEFAULT_SIGNIFICANCE: f64 = 0.95;
pub const DEFAULT_HOURLY_REQUEST_RATE: f64 = 12.0;
pub const DEFAULT_TARGET_SUPPRESSION_FRACTION: f64 = 0.35;

// --- Suppression state ---
pub const DEFAULT_WINDOW_SIZE_HOURS: f64 = 4.0;
pub const DEFAULT_MAX_EPOCH: u32 = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
