use quell_core::config::{defaults, target_fraction_from};
use quell_core::errors::QuellResult;
use quell_core::models::{ResolvedParams, SuppressionParams, SuppressionState, Verdict};
use serde::{Deserialize, Serialize};

use crate::factors::{self, SuppressionContext};

/// Additive suppression score.
///
/// ```text
/// gain           = 1 / (hourlyRate × windowHours × fraction + 0.001)
/// elapsedWindows = floor((now − lastReport) / (windowHours × 3600)) / maxEpoch
/// score          = reportCount × gain + elapsedWindows − significance
/// ```
///
/// Report when `score > 0`. Fails with `Configuration` on an invalid window
/// or max epoch, then with `InvalidState` when the count has no baseline.
pub fn compute(
    state: &SuppressionState,
    params: &ResolvedParams,
    now_secs: f64,
) -> QuellResult<ScoreBreakdown> {
    state.validate()?;
    let report_count = state.require_report_count()?;

    let gain = factors::anomaly::gain(
        params.hourly_request_rate,
        state.window_size_hours,
        params.target_suppression_fraction,
    );
    let anomaly_term = factors::anomaly::term(report_count, gain);
    let elapsed_windows = factors::elapsed::elapsed_windows(state, now_secs);

    let score = anomaly_term + elapsed_windows - params.significance;

    Ok(ScoreBreakdown {
        report_count,
        gain,
        anomaly_term,
        elapsed_windows,
        significance: params.significance,
        score,
        verdict: Verdict::from_score(score),
    })
}

/// Each term of the score, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub report_count: u64,
    pub gain: f64,
    pub anomaly_term: f64,
    pub elapsed_windows: f64,
    pub significance: f64,
    pub score: f64,
    pub verdict: Verdict,
}

/// Decide report (1) or suppress (0) for `state` at `ctx.now`.
///
/// An unset `target_suppression_fraction` is read from `PERCENT`, falling
/// back to 0.35. An unparsable `PERCENT` fails the call.
pub fn evaluate(
    state: &SuppressionState,
    params: &SuppressionParams,
    ctx: &SuppressionContext,
) -> QuellResult<Verdict> {
    evaluate_with_lookup(state, params, ctx, |name| std::env::var(name).ok())
}

/// Same as [`evaluate`] with an injected environment lookup. The lookup is
/// only consulted when `params` leaves the fraction unset.
pub fn evaluate_with_lookup<F>(
    state: &SuppressionState,
    params: &SuppressionParams,
    ctx: &SuppressionContext,
    lookup: F,
) -> QuellResult<Verdict>
where
    F: FnOnce(&str) -> Option<String>,
{
    let default_fraction = match params.target_suppression_fraction {
        Some(fraction) => fraction,
        None => target_fraction_from(defaults::DEFAULT_TARGET_SUPPRESSION_FRACTION, lookup)?,
    };
    evaluate_with_default(state, params, default_fraction, ctx)
}

/// Pure form of [`evaluate`]: `default_fraction` stands in for an unset
/// `target_suppression_fraction`.
pub fn evaluate_with_default(
    state: &SuppressionState,
    params: &SuppressionParams,
    default_fraction: f64,
    ctx: &SuppressionContext,
) -> QuellResult<Verdict> {
    let resolved = params.resolve(default_fraction);
    compute(state, &resolved, ctx.now_secs()).map(|b| b.verdict)
}
