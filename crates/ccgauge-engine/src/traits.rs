use crate::types::{RunDescription, Verdict};

/// Which scoring implementation produced a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineIdentity {
    pub engine: String,
    pub provider: String,
}

/// Strategy seam for verdict computation. The fallback engine in this crate
/// is the default; an alternate implementation can be plugged in through
/// [`crate::factory::build_scoring_engine`].
pub trait ScoringEngine: Send + Sync {
    fn identity(&self) -> EngineIdentity;

    fn compute_verdict(&self, run: &RunDescription) -> Verdict;
}
