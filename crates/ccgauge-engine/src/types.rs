use ccgauge_core::{CcLabel, Objective};
use serde_json::{json, Map, Value};

use crate::fmt::non_finite_tag;

/// A single compositional experiment, validated and ready to score.
///
/// Baselines keep their insertion order: ties for the best singleton are
/// broken by the first extremal entry encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct RunDescription {
    pub theta: f64,
    pub patterns: Vec<String>,
    pub rule: String,
    pub j_baselines: Vec<(String, f64)>,
    pub j_composed: f64,
    pub objective: Objective,
}

impl RunDescription {
    /// Plain-mapping view consumed by exporters and the narrative layer.
    /// Baseline order in the JSON object matches insertion order.
    pub fn to_mapping(&self) -> Value {
        let mut baselines = Map::new();
        for (name, value) in &self.j_baselines {
            baselines.insert(name.clone(), json!(value));
        }
        json!({
            "theta": self.theta,
            "patterns": self.patterns,
            "rule": self.rule,
            "J_baselines": Value::Object(baselines),
            "J_composed": self.j_composed,
            "objective": self.objective.label(),
        })
    }
}

/// Result of a composability analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Composability coefficient; NaN or +inf under the documented edge cases.
    pub cc: f64,
    pub label: CcLabel,
    pub recommendation: String,
    /// Follow-up experiments in priority order.
    pub next_tests: Vec<String>,
    pub checklist: Vec<String>,
}

impl Verdict {
    /// Plain-mapping view. JSON has no NaN/inf, so a non-finite CC is
    /// emitted as the strings "nan" / "inf".
    pub fn to_mapping(&self) -> Value {
        let cc = if self.cc.is_finite() {
            json!(self.cc)
        } else {
            Value::String(non_finite_tag(self.cc).to_string())
        };
        json!({
            "CC": cc,
            "label": self.label.label(),
            "recommendation": self.recommendation,
            "next_tests": self.next_tests,
            "checklist": self.checklist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_mapping_preserves_baseline_order() {
        let run = RunDescription {
            theta: 0.3,
            patterns: vec!["prior".to_string()],
            rule: "blend".to_string(),
            j_baselines: vec![("z".to_string(), 1.0), ("a".to_string(), 2.0)],
            j_composed: 0.8,
            objective: Objective::Minimize,
        };

        let mapping = run.to_mapping();
        let keys: Vec<&String> = mapping["J_baselines"]
            .as_object()
            .expect("baselines object")
            .keys()
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(mapping["objective"], "minimize");
    }

    #[test]
    fn verdict_mapping_tags_non_finite_cc() {
        let verdict = Verdict {
            cc: f64::INFINITY,
            label: CcLabel::Independent,
            recommendation: String::new(),
            next_tests: vec![],
            checklist: vec![],
        };
        assert_eq!(verdict.to_mapping()["CC"], "inf");
    }
}
