//! Structured log events for suppression decisions.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a decision to emit a report.
pub fn report_emitted(entity_id: &str, score: f64, report_count: u64, elapsed_windows: f64) {
    tracing::info!(
        event = "report_emitted",
        entity_id = %entity_id,
        score = score,
        report_count = report_count,
        elapsed_windows = elapsed_windows,
        "anomaly report emitted"
    );
}

/// Log a decision to stay suppressed.
pub fn report_suppressed(entity_id: &str, score: f64, report_count: u64, elapsed_windows: f64) {
    tracing::debug!(
        event = "report_suppressed",
        entity_id = %entity_id,
        score = score,
        report_count = report_count,
        elapsed_windows = elapsed_windows,
        "anomaly report suppressed"
    );
}

/// Log an evaluation that failed before scoring.
pub fn evaluation_rejected(entity_id: &str, error: &str) {
    tracing::warn!(
        event = "evaluation_rejected",
        entity_id = %entity_id,
        error = %error,
        "suppression evaluation rejected"
    );
}

/// Log where the default target suppression fraction came from.
pub fn fraction_resolved(fraction: f64, source: &str) {
    tracing::debug!(
        event = "fraction_resolved",
        fraction = fraction,
        source = %source,
        "target suppression fraction resolved"
    );
}
