use crate::errors::QuellResult;
use crate::models::{SuppressionState, Verdict};

/// Report-or-suppress decision for one monitored entity.
pub trait ISuppressionEvaluator: Send + Sync {
    /// Decide whether `state` warrants a report right now.
    fn evaluate(&self, state: &SuppressionState) -> QuellResult<Verdict>;
}
