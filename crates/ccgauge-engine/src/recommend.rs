//! Deterministic recommendation, next-test, and checklist text.
//!
//! Every sentence here is stable for a given run + CC + label and degrades
//! gracefully when baselines or patterns are missing. The exact strings are
//! pinned by the end-to-end tests in `fallback.rs`.

use ccgauge_core::{CcLabel, Objective};

use crate::fmt::{fmt_cc, fmt_theta, sig3};
use crate::types::RunDescription;

/// Best-performing singleton per the objective, with a `("<none>", NaN)`
/// sentinel when no baselines exist. Ties go to the first extremal entry
/// in insertion order.
pub fn best_baseline(run: &RunDescription) -> (String, f64) {
    let mut best: Option<(&str, f64)> = None;
    for (name, value) in &run.j_baselines {
        let better = match best {
            None => true,
            Some((_, incumbent)) => match run.objective {
                Objective::Minimize => *value < incumbent,
                Objective::Maximize => *value > incumbent,
            },
        };
        if better {
            best = Some((name.as_str(), *value));
        }
    }

    best.map_or_else(
        || ("<none>".to_string(), f64::NAN),
        |(name, value)| (name.to_string(), value),
    )
}

const fn tone_for_label(label: CcLabel) -> &'static str {
    match label {
        CcLabel::Constructive => "Lean into the synergy.",
        CcLabel::Independent => "Hold the line — the blend is neutral.",
        CcLabel::Destructive => "Dial back the composition until diagnostics improve.",
    }
}

/// Single-sentence recommendation tying the numeric CC to the run context.
pub fn make_recommendation(run: &RunDescription, cc: f64, label: CcLabel) -> String {
    let tone = tone_for_label(label);
    let theta = fmt_theta(run.theta);
    let composed = sig3(run.j_composed);
    let cc_text = fmt_cc(cc);

    let mut recommendation = if run.j_baselines.is_empty() {
        format!(
            "{tone} Rule '{}' at θ={theta} delivers {composed} with no singleton baselines; \
             treat CC={cc_text} as relative to a neutral reference (objective={}).",
            run.rule, run.objective
        )
    } else {
        let (best_name, best_value) = best_baseline(run);
        format!(
            "{tone} Rule '{}' at θ={theta} delivers {composed} vs singleton '{best_name}'={} \
             (CC={cc_text}, objective={}).",
            run.rule,
            sig3(best_value),
            run.objective
        )
    };

    if !run.patterns.is_empty() {
        recommendation.push_str(&format!(" Patterns in play: {}.", run.patterns.join(", ")));
    }

    recommendation
}

/// Follow-up experiments in priority order, tailored to the label.
/// Without baselines the suggestions pivot toward establishing a reference.
pub fn make_next_tests(run: &RunDescription, label: CcLabel) -> Vec<String> {
    let mut tests = Vec::with_capacity(3);
    let has_baselines = !run.j_baselines.is_empty();
    let (best_name, best_value) = best_baseline(run);
    let theta = fmt_theta(run.theta);

    match label {
        CcLabel::Constructive => {
            tests.push(format!(
                "Expand the θ sweep around {theta} for rule '{}' to map the constructive window.",
                run.rule
            ));

            if run.patterns.is_empty() {
                tests.push(
                    "Introduce diagnostic ablations for each component before locking the policy."
                        .to_string(),
                );
            } else {
                tests.push(format!(
                    "Run leave-one-pattern-out ablations for {} to verify their individual lifts.",
                    run.patterns.join(", ")
                ));
            }

            if has_baselines {
                tests.push(format!(
                    "Re-evaluate singleton '{best_name}' to confirm the {} reference ({}).",
                    run.objective,
                    sig3(best_value)
                ));
            } else {
                tests.push(
                    "Establish at least one singleton baseline on the same dataset to quantify the lift."
                        .to_string(),
                );
            }
        }
        CcLabel::Destructive => {
            if has_baselines {
                tests.push(format!(
                    "Re-run singleton '{best_name}' ({}) as the fallback while disabling rule '{}'.",
                    sig3(best_value),
                    run.rule
                ));
            } else {
                tests.push(
                    "Define and measure a reference singleton baseline to serve as a safe fallback."
                        .to_string(),
                );
            }

            tests.push(format!(
                "Probe lower θ values than {theta} to find a safer operating point."
            ));
            tests.push(
                "Audit the composed pipeline for unexpected interactions, data leakage, or misconfigured guards."
                    .to_string(),
            );
        }
        CcLabel::Independent => {
            tests.push(format!(
                "Perform a finer θ sweep around {theta} to confirm neutral behavior."
            ));

            if has_baselines {
                tests.push(format!(
                    "Validate measurements for singleton '{best_name}' ({}) to ensure the comparison is trustworthy.",
                    sig3(best_value)
                ));
            } else {
                tests.push(
                    "Measure at least one singleton baseline to anchor the neutrality judgment."
                        .to_string(),
                );
            }

            tests.push(
                "Try orthogonal pattern combinations or alternative rules to search for stronger signals."
                    .to_string(),
            );
        }
    }

    tests
}

/// Sanity and instrumentation items that must hold for the verdict to be
/// trustworthy.
pub fn make_checklist(run: &RunDescription) -> Vec<String> {
    let count = run.j_baselines.len();
    let mut checklist = vec![format!(
        "Confirm objective='{}' aligns with how J is interpreted.",
        run.objective
    )];

    if count > 0 {
        checklist.push(format!(
            "Ensure {count} singleton baselines use the same dataset and evaluation seed as the composition."
        ));
    } else {
        checklist.push(
            "Record and compute at least one singleton baseline on the same dataset as the composition."
                .to_string(),
        );
    }

    checklist.push(format!(
        "Document how θ={} for rule '{}' was chosen.",
        fmt_theta(run.theta),
        run.rule
    ));

    if run.patterns.is_empty() {
        checklist.push("Record why no pattern diagnostics were supplied.".to_string());
    } else {
        checklist.push(format!(
            "Ensure instrumentation exists for patterns: {}.",
            run.patterns.join(", ")
        ));
    }

    checklist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(baselines: &[(&str, f64)], objective: Objective) -> RunDescription {
        RunDescription {
            theta: 0.25,
            patterns: vec![],
            rule: "chain".to_string(),
            j_baselines: baselines
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v))
                .collect(),
            j_composed: 0.5,
            objective,
        }
    }

    #[test]
    fn best_baseline_follows_objective() {
        let minimize = run(&[("a", 1.0), ("b", 0.4)], Objective::Minimize);
        assert_eq!(best_baseline(&minimize), ("b".to_string(), 0.4));

        let maximize = run(&[("a", 1.0), ("b", 0.4)], Objective::Maximize);
        assert_eq!(best_baseline(&maximize), ("a".to_string(), 1.0));
    }

    #[test]
    fn best_baseline_ties_go_to_first_entry() {
        let tied = run(&[("first", 1.0), ("second", 1.0)], Objective::Minimize);
        assert_eq!(best_baseline(&tied).0, "first");
    }

    #[test]
    fn best_baseline_sentinel_when_empty() {
        let empty = run(&[], Objective::Minimize);
        let (name, value) = best_baseline(&empty);
        assert_eq!(name, "<none>");
        assert!(value.is_nan());
    }

    #[test]
    fn recommendation_without_baselines_explains_the_reference() {
        let empty = run(&[], Objective::Minimize);
        let text = make_recommendation(&empty, f64::NAN, CcLabel::Independent);
        assert!(text.contains("with no singleton baselines"));
        assert!(text.contains("treat CC=nan as relative to a neutral reference"));
    }

    #[test]
    fn next_tests_without_baselines_pivot_to_establishing_one() {
        let empty = run(&[], Objective::Minimize);

        let constructive = make_next_tests(&empty, CcLabel::Constructive);
        assert_eq!(constructive.len(), 3);
        assert!(constructive[1].starts_with("Introduce diagnostic ablations"));
        assert!(constructive[2].starts_with("Establish at least one singleton baseline"));

        let destructive = make_next_tests(&empty, CcLabel::Destructive);
        assert!(destructive[0].starts_with("Define and measure a reference singleton baseline"));

        let independent = make_next_tests(&empty, CcLabel::Independent);
        assert!(independent[1].starts_with("Measure at least one singleton baseline"));
    }

    #[test]
    fn checklist_always_has_four_entries() {
        let with = run(&[("a", 1.0)], Objective::Maximize);
        let items = make_checklist(&with);
        assert_eq!(items.len(), 4);
        assert_eq!(
            items[0],
            "Confirm objective='maximize' aligns with how J is interpreted."
        );
        assert_eq!(
            items[1],
            "Ensure 1 singleton baselines use the same dataset and evaluation seed as the composition."
        );

        let without = run(&[], Objective::Minimize);
        let items = make_checklist(&without);
        assert_eq!(items.len(), 4);
        assert_eq!(
            items[3],
            "Record why no pattern diagnostics were supplied."
        );
    }
}
