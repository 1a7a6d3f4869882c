use std::sync::Arc;

use crate::fallback::FallbackEngine;
use crate::traits::ScoringEngine;

/// Which scoring engine to run. Selected once at construction; there is no
/// runtime discovery of alternate implementations.
#[derive(Clone, Default)]
pub enum EngineConfig {
    #[default]
    Fallback,
    /// A caller-supplied alternate engine with the same two operations.
    External(Arc<dyn ScoringEngine>),
}

pub fn build_scoring_engine(cfg: EngineConfig) -> Arc<dyn ScoringEngine> {
    match cfg {
        EngineConfig::Fallback => Arc::new(FallbackEngine),
        EngineConfig::External(engine) => engine,
    }
}

#[cfg(test)]
mod tests {
    use ccgauge_core::CcLabel;

    use super::*;
    use crate::traits::EngineIdentity;
    use crate::types::{RunDescription, Verdict};

    struct StubEngine;

    impl ScoringEngine for StubEngine {
        fn identity(&self) -> EngineIdentity {
            EngineIdentity {
                engine: "stub".to_string(),
                provider: "tests".to_string(),
            }
        }

        fn compute_verdict(&self, _run: &RunDescription) -> Verdict {
            Verdict {
                cc: 1.0,
                label: CcLabel::Independent,
                recommendation: String::new(),
                next_tests: vec![],
                checklist: vec![],
            }
        }
    }

    #[test]
    fn default_config_builds_the_fallback_engine() {
        let engine = build_scoring_engine(EngineConfig::default());
        assert_eq!(engine.identity().engine, "fallback");
    }

    #[test]
    fn external_engine_is_used_as_given() {
        let engine = build_scoring_engine(EngineConfig::External(Arc::new(StubEngine)));
        assert_eq!(engine.identity().engine, "stub");
        assert_eq!(engine.identity().provider, "tests");
    }
}
