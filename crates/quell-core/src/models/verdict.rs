use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a suppression evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Keep quiet; the score did not cross the significance bar.
    Suppress = 0,
    /// Emit a report now.
    Report = 1,
}

impl Verdict {
    /// `Report` when `score > 0`, otherwise `Suppress`. A NaN score suppresses.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Report
        } else {
            Self::Suppress
        }
    }

    /// The 0/1 flag form.
    pub fn as_flag(self) -> u8 {
        self as u8
    }

    pub fn should_report(self) -> bool {
        self == Self::Report
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suppress => f.write_str("suppress"),
            Self::Report => f.write_str("report"),
        }
    }
}

impl From<Verdict> for u8 {
    fn from(v: Verdict) -> Self {
        v.as_flag()
    }
}

impl From<Verdict> for bool {
    fn from(v: Verdict) -> Self {
        v.should_report()
    }
}
