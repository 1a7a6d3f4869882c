use ccgauge_core::{classify_cc_default, compute_cc};

use crate::recommend::{make_checklist, make_next_tests, make_recommendation};
use crate::traits::{EngineIdentity, ScoringEngine};
use crate::types::{RunDescription, Verdict};

pub const FALLBACK_ENGINE_NAME: &str = "fallback";
pub const FALLBACK_ENGINE_PROVIDER: &str = "ccgauge-engine";

/// Compute a verdict with the built-in scoring logic.
///
/// Pure and synchronous: CC from the baselines and composed score, the
/// label from the tolerance band, then the deterministic recommendation,
/// next-test, and checklist text. Identical inputs yield identical verdicts.
pub fn compute_verdict(run: &RunDescription) -> Verdict {
    let cc = compute_cc(&run.j_baselines, run.j_composed, run.objective);
    let label = classify_cc_default(cc);

    Verdict {
        cc,
        label,
        recommendation: make_recommendation(run, cc, label),
        next_tests: make_next_tests(run, label),
        checklist: make_checklist(run),
    }
}

/// The default, in-process scoring engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEngine;

impl ScoringEngine for FallbackEngine {
    fn identity(&self) -> EngineIdentity {
        EngineIdentity {
            engine: FALLBACK_ENGINE_NAME.to_string(),
            provider: FALLBACK_ENGINE_PROVIDER.to_string(),
        }
    }

    fn compute_verdict(&self, run: &RunDescription) -> Verdict {
        compute_verdict(run)
    }
}
