//! Quick-view helpers for UI previews and one-line summaries. None of these
//! classify or generate narrative text; use the engine for that.

use ccgauge_core::{best_singleton_value, compute_cc, Objective};

use crate::fmt::fmt_cc;
use crate::types::{RunDescription, Verdict};

/// Compact numeric view over a run: θ, objective, best singleton, CC.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionSummary {
    pub theta: f64,
    pub objective: Objective,
    /// Best finite baseline J per the objective, None when no baselines exist.
    pub best_singleton: Option<f64>,
    pub cc: f64,
}

pub fn analyze_composition(run: &RunDescription) -> CompositionSummary {
    CompositionSummary {
        theta: run.theta,
        objective: run.objective,
        best_singleton: best_singleton_value(&run.j_baselines, run.objective),
        cc: compute_cc(&run.j_baselines, run.j_composed, run.objective),
    }
}

/// One-line human summary of a verdict, with at most two next tests as a
/// preview.
pub fn format_verdict(verdict: &Verdict) -> String {
    let preview = if verdict.next_tests.is_empty() {
        "no follow-ups".to_string()
    } else {
        verdict
            .next_tests
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{} (CC={}): {} Next: {preview}.",
        verdict.label,
        fmt_cc(verdict.cc),
        verdict.recommendation
    )
}

/// Symmetric θ ± ε band clamped to [0, 1]. Negative ε is treated as |ε|.
pub fn fh_bounds(theta: f64, epsilon: f64) -> (f64, f64) {
    let eps = epsilon.abs();
    ((theta - eps).max(0.0), (theta + eps).min(1.0))
}

#[cfg(test)]
mod tests {
    use ccgauge_core::CcLabel;

    use super::*;

    #[test]
    fn analyze_reports_best_singleton_and_cc() {
        let run = RunDescription {
            theta: 0.3,
            patterns: vec![],
            rule: "blend".to_string(),
            j_baselines: vec![("A".to_string(), 1.0), ("B".to_string(), 1.2)],
            j_composed: 0.8,
            objective: Objective::Minimize,
        };

        let summary = analyze_composition(&run);
        assert_eq!(summary.best_singleton, Some(1.0));
        assert!((summary.cc - 0.8).abs() < 1e-12);
    }

    #[test]
    fn analyze_without_baselines_has_no_reference() {
        let run = RunDescription {
            theta: 0.3,
            patterns: vec![],
            rule: "solo".to_string(),
            j_baselines: vec![],
            j_composed: 0.8,
            objective: Objective::Maximize,
        };

        let summary = analyze_composition(&run);
        assert_eq!(summary.best_singleton, None);
        assert!(summary.cc.is_nan());
    }

    #[test]
    fn verdict_formats_on_one_line() {
        let verdict = Verdict {
            cc: 0.93,
            label: CcLabel::Constructive,
            recommendation: "Composition reduces effective leak.".to_string(),
            next_tests: vec!["test A".to_string(), "test B".to_string(), "test C".to_string()],
            checklist: vec![],
        };

        assert_eq!(
            format_verdict(&verdict),
            "Constructive (CC=0.93): Composition reduces effective leak. Next: test A, test B."
        );

        let quiet = Verdict {
            next_tests: vec![],
            ..verdict
        };
        assert!(format_verdict(&quiet).ends_with("Next: no follow-ups."));
    }

    #[test]
    fn bounds_are_clamped_to_the_unit_interval() {
        let (lo, hi) = fh_bounds(0.5, 0.05);
        assert!((lo - 0.45).abs() < 1e-12 && (hi - 0.55).abs() < 1e-12);

        let (lo, hi) = fh_bounds(0.02, 0.05);
        assert!(lo.abs() < 1e-12 && (hi - 0.07).abs() < 1e-12);

        let (lo, hi) = fh_bounds(0.99, -0.05);
        assert!((lo - 0.94).abs() < 1e-12 && (hi - 1.0).abs() < 1e-12);
    }
}
