use ccgauge_engine::fmt::{fmt_cc, fmt_theta, sig3};
use ccgauge_engine::{RunDescription, Verdict};

/// Deterministic explanation used when no provider is configured or the
/// provider call fails. Describes the same numbers found in the verdict so
/// the tool keeps working without a network.
pub fn offline_explanation(run: &RunDescription, verdict: &Verdict) -> String {
    let baseline_names = if run.j_baselines.is_empty() {
        "none".to_string()
    } else {
        run.j_baselines
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Narrative generation is running in offline mode (no provider configured).\n\n\
         - Composition rule: '{}' at θ={}\n\
         - Objective: '{}' over {} singleton(s): {}\n\
         - Composed J: {}\n\
         - Composability verdict: {} with CC={}\n\n\
         A {} label means the composed guardrails behave as classified by the CC \
         metric relative to the best singleton. Configure a narrative provider to \
         get a richer explanation.",
        run.rule,
        fmt_theta(run.theta),
        run.objective,
        run.j_baselines.len(),
        baseline_names,
        sig3(run.j_composed),
        verdict.label,
        fmt_cc(verdict.cc),
        verdict.label,
    )
}

#[cfg(test)]
mod tests {
    use ccgauge_engine::{Objective, compute_verdict};

    use super::*;

    #[test]
    fn offline_text_is_deterministic_and_numeric() {
        let run = RunDescription {
            theta: 0.3,
            patterns: vec!["prior".to_string()],
            rule: "blend".to_string(),
            j_baselines: vec![("A".to_string(), 1.0), ("B".to_string(), 1.2)],
            j_composed: 0.8,
            objective: Objective::Minimize,
        };
        let verdict = compute_verdict(&run);

        let first = offline_explanation(&run, &verdict);
        let second = offline_explanation(&run, &verdict);
        assert_eq!(first, second);

        assert!(first.contains("'blend' at θ=0.30"));
        assert!(first.contains("2 singleton(s): A, B"));
        assert!(first.contains("Constructive with CC=0.80"));
    }

    #[test]
    fn offline_text_handles_missing_baselines() {
        let run = RunDescription {
            theta: 0.0,
            patterns: vec![],
            rule: "solo".to_string(),
            j_baselines: vec![],
            j_composed: 0.4,
            objective: Objective::Minimize,
        };
        let verdict = compute_verdict(&run);

        let text = offline_explanation(&run, &verdict);
        assert!(text.contains("0 singleton(s): none"));
        assert!(text.contains("CC=nan"));
    }
}
