mod params;
mod state;
mod timestamp;
mod verdict;

pub use params::{ResolvedParams, SuppressionParams};
pub use state::SuppressionState;
pub use timestamp::unix_seconds;
pub use verdict::Verdict;
