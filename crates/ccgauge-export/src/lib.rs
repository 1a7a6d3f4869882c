//! Exporters over the plain-mapping view of runs and verdicts. Nothing here
//! recomputes scores; the verdict object is the single source of truth.

use std::fs;
use std::path::Path;

use ccgauge_engine::fmt::{fmt_cc, fmt_theta};
use ccgauge_engine::{RunDescription, Verdict};
use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;

pub const DEFAULT_REPORT_TITLE: &str = "Guardrail One-Pager";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// JSON-ready payload: run + verdict mappings with an RFC 3339 stamp and
/// optional free-form metadata.
pub fn build_payload(
    run: Option<&RunDescription>,
    verdict: &Verdict,
    metadata: Option<Value>,
) -> Value {
    let mut payload = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "run": run.map_or_else(|| json!({}), RunDescription::to_mapping),
        "verdict": verdict.to_mapping(),
    });
    if let (Some(obj), Some(meta)) = (payload.as_object_mut(), metadata) {
        obj.insert("metadata".to_string(), meta);
    }
    payload
}

pub fn verdict_to_json(
    verdict: &Verdict,
    run: Option<&RunDescription>,
    metadata: Option<Value>,
) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&build_payload(
        run, verdict, metadata,
    ))?)
}

/// Plain-text one-pager with "Next Tests" and "Checklist" sections.
pub fn render_text_report(run: &RunDescription, verdict: &Verdict, title: &str) -> String {
    let mut lines: Vec<String> = vec![title.to_string(), "=".repeat(title.chars().count())];

    lines.push(format!(
        "Rule: {} (θ={})",
        run.rule,
        fmt_theta(run.theta)
    ));
    lines.push(format!("Objective: {}", run.objective));
    lines.push(format!(
        "Label: {} (CC={})",
        verdict.label,
        fmt_cc(verdict.cc)
    ));
    lines.push(String::new());

    lines.push("Recommendation".to_string());
    lines.push(verdict.recommendation.clone());
    lines.push(String::new());

    push_list_section(&mut lines, "Next Tests", &verdict.next_tests);
    lines.push(String::new());
    push_list_section(&mut lines, "Checklist", &verdict.checklist);

    let mut report = lines.join("\n");
    while report.ends_with('\n') {
        report.pop();
    }
    report.push('\n');
    report
}

fn push_list_section(lines: &mut Vec<String>, header: &str, items: &[String]) {
    lines.push(header.to_string());
    if items.is_empty() {
        lines.push("(none)".to_string());
        return;
    }
    for (idx, item) in items.iter().enumerate() {
        lines.push(format!("{}. {item}", idx + 1));
    }
}

/// Write the text report to disk.
pub fn export_one_pager(
    run: &RunDescription,
    verdict: &Verdict,
    path: impl AsRef<Path>,
    title: &str,
) -> Result<(), ExportError> {
    fs::write(path, render_text_report(run, verdict, title))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ccgauge_engine::{compute_verdict, Objective};

    use super::*;

    fn sample_run() -> RunDescription {
        RunDescription {
            theta: 0.3,
            patterns: vec!["prior".to_string(), "denoiser".to_string()],
            rule: "blend".to_string(),
            j_baselines: vec![("A".to_string(), 1.0), ("B".to_string(), 1.2)],
            j_composed: 0.8,
            objective: Objective::Minimize,
        }
    }

    #[test]
    fn report_contains_the_contract_sections() {
        let run = sample_run();
        let verdict = compute_verdict(&run);
        let report = render_text_report(&run, &verdict, DEFAULT_REPORT_TITLE);

        assert!(report.starts_with("Guardrail One-Pager\n===================\n"));
        assert!(report.contains("Rule: blend (θ=0.30)"));
        assert!(report.contains("Label: Constructive (CC=0.80)"));
        assert!(report.contains("\nNext Tests\n1. "));
        assert!(report.contains("\nChecklist\n1. "));
        assert!(report.ends_with('\n'));
        assert!(!report.ends_with("\n\n"));
    }

    #[test]
    fn report_numbers_every_item() {
        let run = sample_run();
        let verdict = compute_verdict(&run);
        let report = render_text_report(&run, &verdict, DEFAULT_REPORT_TITLE);

        for idx in 1..=3 {
            assert!(report.contains(&format!("{idx}. ")), "missing item {idx}");
        }
        assert!(report.contains("4. "), "checklist has four entries");
    }

    #[test]
    fn payload_is_json_ready() {
        let run = sample_run();
        let verdict = compute_verdict(&run);
        let payload = build_payload(Some(&run), &verdict, Some(json!({"suite": "nightly"})));

        assert_eq!(payload["run"]["rule"], "blend");
        assert_eq!(payload["verdict"]["label"], "Constructive");
        assert_eq!(payload["metadata"]["suite"], "nightly");
        assert!(payload["generated_at"].is_string());

        let text = verdict_to_json(&verdict, Some(&run), None).expect("to json");
        assert!(text.contains("\"label\": \"Constructive\""));
    }

    #[test]
    fn payload_without_run_uses_an_empty_mapping() {
        let run = sample_run();
        let verdict = compute_verdict(&run);
        let payload = build_payload(None, &verdict, None);

        assert_eq!(payload["run"], json!({}));
        assert!(payload.get("metadata").is_none());
    }

    #[test]
    fn one_pager_roundtrips_through_disk() {
        let run = sample_run();
        let verdict = compute_verdict(&run);
        let path = std::env::temp_dir().join(format!(
            "ccgauge-one-pager-{}.txt",
            std::process::id()
        ));

        export_one_pager(&run, &verdict, &path, DEFAULT_REPORT_TITLE).expect("export");
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, render_text_report(&run, &verdict, DEFAULT_REPORT_TITLE));

        let _ = fs::remove_file(path);
    }
}
