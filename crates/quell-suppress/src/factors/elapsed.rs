use quell_core::constants::SECONDS_PER_HOUR;
use quell_core::models::SuppressionState;

/// Time term: `floor((now - lastReport) / windowSeconds) / maxEpoch`.
///
/// Only fully elapsed windows count; a partial window adds nothing until
/// its boundary is crossed. Expects a validated state.
pub fn elapsed_windows(state: &SuppressionState, now_secs: f64) -> f64 {
    let window_secs = state.window_size_hours * SECONDS_PER_HOUR;
    ((now_secs - state.last_report_timestamp) / window_secs).floor() / f64::from(state.max_epoch)
}
