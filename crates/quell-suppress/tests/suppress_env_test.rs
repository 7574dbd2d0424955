//! Reads the real `PERCENT` variable. Kept to a single test in its own binary
//! because process environment is global.

use chrono::{TimeZone, Utc};
use quell_core::config::SuppressionConfig;
use quell_core::errors::{ConfigError, QuellError};
use quell_core::models::*;
use quell_core::traits::ISuppressionEvaluator;
use quell_suppress::{evaluate, SuppressionContext, SuppressionEngine};

#[test]
fn percent_variable_drives_unset_fraction() {
    let now = Utc.timestamp_opt(1_708_570_222, 0).unwrap();
    let ctx = SuppressionContext::at(now);
    let state = SuppressionState::default().after_report(now).record_anomalies(20);
    let defaulted = SuppressionParams::default();

    // Set: 0.7 makes 20 anomalies too few to report.
    std::env::set_var("PERCENT", "0.7");
    let config = SuppressionConfig::default();
    assert_eq!(config.resolve_target_fraction().unwrap(), 0.7);
    let engine = SuppressionEngine::from_config(&config).unwrap();
    assert_eq!(engine.default_fraction().unwrap(), 0.7);
    assert_eq!(evaluate(&state, &defaulted, &ctx).unwrap(), Verdict::Suppress);
    let live = SuppressionEngine::new();
    assert_eq!(live.default_fraction().unwrap(), 0.7);
    assert_eq!(
        live.evaluate_with_context(&state, &ctx).unwrap(),
        Verdict::Suppress
    );

    // Unparsable: unset fractions fail, explicit ones still evaluate.
    std::env::set_var("PERCENT", "lots");
    assert!(matches!(
        evaluate(&state, &defaulted, &ctx).unwrap_err(),
        QuellError::Config(ConfigError::InvalidEnvValue { .. })
    ));
    assert!(live.evaluate(&state).is_err());
    assert_eq!(
        evaluate(&state, &defaulted.with_fraction(0.35), &ctx).unwrap(),
        Verdict::Report
    );

    // Removed: back to 0.35.
    std::env::remove_var("PERCENT");
    assert_eq!(config.resolve_target_fraction().unwrap(), 0.35);
    let engine = SuppressionEngine::from_config(&config).unwrap();
    assert_eq!(engine.default_fraction().unwrap(), 0.35);
    assert_eq!(evaluate(&state, &defaulted, &ctx).unwrap(), Verdict::Report);
    assert_eq!(
        live.evaluate_with_context(&state, &ctx).unwrap(),
        Verdict::Report
    );
}
