use quell_core::config::{defaults, target_fraction_from, SuppressionConfig};
use quell_core::errors::QuellResult;
use quell_core::models::{SuppressionParams, SuppressionState, Verdict};
use quell_core::traits::ISuppressionEvaluator;
use quell_observability::tracing_setup::events;

use crate::decision::SuppressionDecision;
use crate::factors::SuppressionContext;
use crate::formula::{self, ScoreBreakdown};

/// Where an engine gets the target fraction when the params leave it unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractionSource {
    /// Pinned when the engine was built.
    Fixed(f64),
    /// `PERCENT` read on every evaluation, else `fallback`.
    Environment { fallback: f64 },
}

impl FractionSource {
    fn resolve(self) -> QuellResult<f64> {
        match self {
            Self::Fixed(fraction) => Ok(fraction),
            Self::Environment { fallback } => {
                Ok(target_fraction_from(fallback, |name| std::env::var(name).ok())?)
            }
        }
    }
}

/// Suppression engine: the scoring formula bound to a set of tunables and a
/// source for the default target fraction.
pub struct SuppressionEngine {
    params: SuppressionParams,
    /// Used when `params.target_suppression_fraction` is unset.
    fraction_source: FractionSource,
}

impl SuppressionEngine {
    /// Create a new SuppressionEngine with the built-in tunables. An unset
    /// fraction is read from `PERCENT` at evaluation time, else 0.35.
    pub fn new() -> Self {
        Self {
            params: SuppressionParams::default(),
            fraction_source: FractionSource::Environment {
                fallback: defaults::DEFAULT_TARGET_SUPPRESSION_FRACTION,
            },
        }
    }

    /// Create with explicit tunables and a pinned fallback fraction.
    pub fn with_params(params: SuppressionParams, default_fraction: f64) -> Self {
        Self {
            params,
            fraction_source: FractionSource::Fixed(default_fraction),
        }
    }

    /// Build from config. The fallback fraction comes from `PERCENT` when set,
    /// otherwise from `target_suppression_fraction`.
    pub fn from_config(config: &SuppressionConfig) -> QuellResult<Self> {
        Self::from_config_with(config, |name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_config`] with an injected environment lookup.
    pub fn from_config_with<F>(config: &SuppressionConfig, lookup: F) -> QuellResult<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        config.validate()?;
        let mut from_env = false;
        let default_fraction = config.resolve_target_fraction_from(|name| {
            let value = lookup(name);
            from_env = value.is_some();
            value
        })?;
        events::fraction_resolved(default_fraction, if from_env { "env" } else { "config" });
        Ok(Self::with_params(config.params(), default_fraction))
    }

    pub fn params(&self) -> &SuppressionParams {
        &self.params
    }

    pub fn fraction_source(&self) -> FractionSource {
        self.fraction_source
    }

    /// The target fraction applied when the params leave it unset.
    pub fn default_fraction(&self) -> QuellResult<f64> {
        self.fraction_source.resolve()
    }

    /// The fraction this engine actually scores with.
    pub fn effective_fraction(&self) -> QuellResult<f64> {
        match self.params.target_suppression_fraction {
            Some(fraction) => Ok(fraction),
            None => self.default_fraction(),
        }
    }

    /// Decide report or suppress at `ctx.now`.
    pub fn evaluate_with_context(
        &self,
        state: &SuppressionState,
        ctx: &SuppressionContext,
    ) -> QuellResult<Verdict> {
        self.evaluate_breakdown(state, ctx).map(|b| b.verdict)
    }

    /// Score with a full breakdown of each term.
    pub fn evaluate_breakdown(
        &self,
        state: &SuppressionState,
        ctx: &SuppressionContext,
    ) -> QuellResult<ScoreBreakdown> {
        let resolved = self.params.resolve(self.effective_fraction()?);
        formula::compute(state, &resolved, ctx.now_secs())
    }

    /// Evaluate one entity and log the outcome.
    pub fn decide(
        &self,
        entity_id: &str,
        state: &SuppressionState,
        ctx: &SuppressionContext,
    ) -> QuellResult<SuppressionDecision> {
        let breakdown = match self.evaluate_breakdown(state, ctx) {
            Ok(b) => b,
            Err(e) => {
                events::evaluation_rejected(entity_id, &e.to_string());
                return Err(e);
            }
        };

        if breakdown.verdict.should_report() {
            events::report_emitted(
                entity_id,
                breakdown.score,
                breakdown.report_count,
                breakdown.elapsed_windows,
            );
        } else {
            events::report_suppressed(
                entity_id,
                breakdown.score,
                breakdown.report_count,
                breakdown.elapsed_windows,
            );
        }

        Ok(SuppressionDecision::from_breakdown(entity_id, breakdown))
    }

    /// Decide for a batch of entities against one shared `now`. Results keep input order;
    /// a failing entity does not stop the rest.
    pub fn evaluate_batch<S: AsRef<str>>(
        &self,
        entities: &[(S, SuppressionState)],
        ctx: &SuppressionContext,
    ) -> Vec<QuellResult<SuppressionDecision>> {
        entities
            .iter()
            .map(|(id, state)| self.decide(id.as_ref(), state, ctx))
            .collect()
    }
}

impl Default for SuppressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ISuppressionEvaluator for SuppressionEngine {
    fn evaluate(&self, state: &SuppressionState) -> QuellResult<Verdict> {
        // Default context: current time.
        let ctx = SuppressionContext::default();
        self.evaluate_with_context(state, &ctx)
    }
}
