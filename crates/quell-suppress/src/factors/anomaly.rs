use quell_core::constants::GAIN_EPSILON;

/// Score gain per anomaly: `1 / (hourlyRate × windowHours × fraction + 0.001)`.
///
/// The reciprocal of the anomaly budget of one window, so a window that hits
/// its target fraction contributes roughly 1.0 to the score.
pub fn gain(hourly_request_rate: f64, window_size_hours: f64, target_fraction: f64) -> f64 {
    1.0 / (hourly_request_rate * window_size_hours * target_fraction + GAIN_EPSILON)
}

/// Anomaly pressure term: `reportCount × gain`.
pub fn term(report_count: u64, gain: f64) -> f64 {
    report_count as f64 * gain
}
