use quell_core::models::Verdict;
use serde::{Deserialize, Serialize};

use crate::formula::ScoreBreakdown;

/// Verdict for one monitored entity, with the reasoning kept for audit logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionDecision {
    pub entity_id: String,
    pub verdict: Verdict,
    pub breakdown: ScoreBreakdown,
    pub reason: String,
}

impl SuppressionDecision {
    pub fn from_breakdown(entity_id: &str, breakdown: ScoreBreakdown) -> Self {
        let reason = if breakdown.verdict.should_report() {
            format!(
                "score {:.3} above zero: {} anomalies contribute {:.3}, {:.3} elapsed windows, significance {:.3}",
                breakdown.score,
                breakdown.report_count,
                breakdown.anomaly_term,
                breakdown.elapsed_windows,
                breakdown.significance
            )
        } else {
            format!(
                "score {:.3} not above zero; suppressed",
                breakdown.score
            )
        };

        Self {
            entity_id: entity_id.to_string(),
            verdict: breakdown.verdict,
            breakdown,
            reason,
        }
    }

    pub fn should_report(&self) -> bool {
        self.verdict.should_report()
    }
}
