use chrono::{DateTime, Duration, TimeZone, Utc};
use quell_core::errors::QuellError;
use quell_core::models::*;
use quell_core::errors::ConfigError;
use quell_suppress::{evaluate, evaluate_with_default, evaluate_with_lookup, SuppressionContext};

const WINDOW_SECS: i64 = 4 * 3600;

fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_708_570_222, 0).unwrap()
}

fn make_state(report_count: Option<u64>, last_report: DateTime<Utc>) -> SuppressionState {
    SuppressionState {
        report_count,
        window_size_hours: 4.0,
        last_report_timestamp: unix_seconds(last_report),
        max_epoch: 2,
    }
}

fn params() -> SuppressionParams {
    SuppressionParams::default().with_fraction(0.35)
}

// ── Reference scenarios ──────────────────────────────────────────────────

#[test]
fn quiet_entity_just_reported_stays_suppressed() {
    let now = fixed_now();
    let state = make_state(Some(0), now);
    let verdict = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap();
    assert_eq!(verdict, Verdict::Suppress);
    assert_eq!(verdict.as_flag(), 0);
}

#[test]
fn anomaly_spike_forces_early_report() {
    let now = fixed_now();
    let state = make_state(Some(20), now);
    let verdict = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap();
    assert_eq!(verdict, Verdict::Report);
    assert_eq!(verdict.as_flag(), 1);
}

#[test]
fn five_elapsed_windows_report_without_anomalies() {
    let now = fixed_now();
    let state = make_state(Some(0), now - Duration::seconds(5 * WINDOW_SECS));
    let verdict = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap();
    assert_eq!(verdict, Verdict::Report);
}

#[test]
fn sixteen_anomalies_tip_the_balance() {
    // 16 × 0.05952 − 0.95 ≈ 0.002 > 0, 15 × 0.05952 − 0.95 ≈ −0.057 < 0.
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    assert_eq!(
        evaluate(&make_state(Some(16), now), &params(), &ctx).unwrap(),
        Verdict::Report
    );
    assert_eq!(
        evaluate(&make_state(Some(15), now), &params(), &ctx).unwrap(),
        Verdict::Suppress
    );
}

#[test]
fn unset_fraction_defaults_to_thirty_five_percent() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let defaulted = SuppressionParams::default();
    for count in [0, 15, 16, 20] {
        let state = make_state(Some(count), now);
        assert_eq!(
            evaluate_with_lookup(&state, &defaulted, &ctx, |_| None).unwrap(),
            evaluate(&state, &params(), &ctx).unwrap(),
            "count {count}"
        );
    }
}

#[test]
fn unset_fraction_is_read_from_percent() {
    // Fraction 0.7: 20 / 33.601 − 0.95 ≈ −0.355.
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let state = make_state(Some(20), now);
    let verdict = evaluate_with_lookup(&state, &SuppressionParams::default(), &ctx, |name| {
        assert_eq!(name, "PERCENT");
        Some("0.7".to_string())
    })
    .unwrap();
    assert_eq!(verdict, Verdict::Suppress);
}

#[test]
fn explicit_fraction_skips_percent_lookup() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let verdict = evaluate_with_lookup(&make_state(Some(20), now), &params(), &ctx, |_| {
        panic!("PERCENT must not be read when the fraction is explicit")
    })
    .unwrap();
    assert_eq!(verdict, Verdict::Report);
}

#[test]
fn unparsable_percent_fails_the_call() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let err = evaluate_with_lookup(
        &make_state(Some(20), now),
        &SuppressionParams::default(),
        &ctx,
        |_| Some("35%".to_string()),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        QuellError::Config(ConfigError::InvalidEnvValue { .. })
    ));
}

#[test]
fn explicit_default_fraction_is_pure() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let state = make_state(Some(20), now);
    let defaulted = SuppressionParams::default();
    assert_eq!(
        evaluate_with_default(&state, &defaulted, 0.7, &ctx).unwrap(),
        Verdict::Suppress
    );
    assert_eq!(
        evaluate_with_default(&state, &defaulted, 0.35, &ctx).unwrap(),
        Verdict::Report
    );
}

// ── Time term ────────────────────────────────────────────────────────────

#[test]
fn partial_windows_do_not_count() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    // Just short of two full windows: floor(1.99..) / 2 = 0.5 < 0.95.
    let state = make_state(Some(0), now - Duration::seconds(2 * WINDOW_SECS - 1));
    assert_eq!(evaluate(&state, &params(), &ctx).unwrap(), Verdict::Suppress);

    // Exactly two windows: 2 / 2 = 1.0 > 0.95.
    let state = make_state(Some(0), now - Duration::seconds(2 * WINDOW_SECS));
    assert_eq!(evaluate(&state, &params(), &ctx).unwrap(), Verdict::Report);
}

#[test]
fn never_reported_entity_reports_on_first_evaluation() {
    // last_report_timestamp = 0 puts decades of windows behind us.
    let state = SuppressionState::default().with_baseline();
    let verdict = evaluate(&state, &params(), &SuppressionContext::at(fixed_now())).unwrap();
    assert_eq!(verdict, Verdict::Report);
}

#[test]
fn larger_max_epoch_slows_the_time_trigger() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let mut state = make_state(Some(0), now - Duration::seconds(2 * WINDOW_SECS));
    state.max_epoch = 3;
    // 2 / 3 ≈ 0.667 < 0.95
    assert_eq!(evaluate(&state, &params(), &ctx).unwrap(), Verdict::Suppress);
}

#[test]
fn zero_fraction_is_finite() {
    let now = fixed_now();
    let ctx = SuppressionContext::at(now);
    let p = SuppressionParams::default().with_fraction(0.0);
    // gain = 1 / 0.001: a single anomaly trips the bar.
    assert_eq!(
        evaluate(&make_state(Some(1), now), &p, &ctx).unwrap(),
        Verdict::Report
    );
    assert_eq!(
        evaluate(&make_state(Some(0), now), &p, &ctx).unwrap(),
        Verdict::Suppress
    );
}

// ── Errors ───────────────────────────────────────────────────────────────

#[test]
fn max_epoch_of_one_is_a_configuration_error() {
    let now = fixed_now();
    let mut state = make_state(Some(5), now);
    state.max_epoch = 1;
    let err = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap_err();
    assert!(matches!(err, QuellError::Configuration { field: "max_epoch", .. }));
}

#[test]
fn zero_window_is_a_configuration_error() {
    let now = fixed_now();
    let mut state = make_state(Some(5), now);
    state.window_size_hours = 0.0;
    let err = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap_err();
    assert!(matches!(
        err,
        QuellError::Configuration {
            field: "window_size_hours",
            ..
        }
    ));
}

#[test]
fn configuration_is_checked_before_the_baseline() {
    let now = fixed_now();
    let mut state = make_state(None, now);
    state.max_epoch = 0;
    let err = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn missing_baseline_is_an_invalid_state_error() {
    let now = fixed_now();
    let state = make_state(None, now);
    let err = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap_err();
    assert!(matches!(err, QuellError::InvalidState { .. }));
}

#[test]
fn evaluation_does_not_touch_state() {
    let now = fixed_now();
    let state = make_state(Some(20), now - Duration::seconds(3 * WINDOW_SECS));
    let before = state.clone();
    let _ = evaluate(&state, &params(), &SuppressionContext::at(now)).unwrap();
    assert_eq!(state, before);
}
