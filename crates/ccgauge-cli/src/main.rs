#![allow(clippy::print_stdout)]

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ccgauge_engine::{
    build_scoring_engine, EngineConfig, Objective, RunDescription, ScoringEngine,
};
use ccgauge_explain::offline_explanation;
use ccgauge_export::{export_one_pager, render_text_report, verdict_to_json, DEFAULT_REPORT_TITLE};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ccgauge", version, about = "Composability scoring for stacked guardrails")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print which scoring engine implementation is active.
    EngineInfo,
    /// Score a small built-in smoke run and print the verdict as JSON.
    Quickcheck,
    /// Score a run description read from a JSON file (or stdin with "-").
    Run {
        /// Path to the raw run description, or "-" for stdin.
        #[arg(long)]
        input: String,
        /// Override the objective from the document.
        #[arg(long)]
        objective: Option<String>,
        /// Print the verdict as pretty JSON instead of the text one-pager.
        #[arg(long)]
        json: bool,
        /// Also write the text one-pager to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the deterministic offline narrative for a run description.
    Explain {
        /// Path to the raw run description, or "-" for stdin.
        #[arg(long)]
        input: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_scoring_engine(EngineConfig::Fallback);

    match cli.command {
        Command::EngineInfo => {
            let identity = engine.identity();
            println!("engine: {}", identity.engine);
            println!("provider: {}", identity.provider);
        }
        Command::Quickcheck => {
            let run = quickcheck_run()?;
            let verdict = engine.compute_verdict(&run);
            println!("{}", verdict_to_json(&verdict, Some(&run), None)?);
        }
        Command::Run {
            input,
            objective,
            json,
            report,
        } => {
            let run = load_run(&input, objective.as_deref())?;
            let verdict = engine.compute_verdict(&run);

            if let Some(path) = &report {
                export_one_pager(&run, &verdict, path, DEFAULT_REPORT_TITLE)
                    .with_context(|| format!("writing one-pager to {}", path.display()))?;
                tracing::info!(path = %path.display(), "one-pager written");
            }

            if json {
                let metadata = engine_metadata(&*engine);
                println!("{}", verdict_to_json(&verdict, Some(&run), Some(metadata))?);
            } else {
                print!("{}", render_text_report(&run, &verdict, DEFAULT_REPORT_TITLE));
            }
        }
        Command::Explain { input } => {
            let run = load_run(&input, None)?;
            let verdict = engine.compute_verdict(&run);
            println!("{}", offline_explanation(&run, &verdict));
        }
    }

    Ok(())
}

fn engine_metadata(engine: &dyn ScoringEngine) -> Value {
    let identity = engine.identity();
    json!({
        "engine": identity.engine,
        "provider": identity.provider,
    })
}

fn quickcheck_run() -> Result<RunDescription> {
    let raw = json!({
        "theta": 0.5,
        "patterns": ["demo"],
        "rule": "sequential",
        "J_baselines": {"A": 0.30, "B": 0.40},
        "J_composed": 0.28,
        "objective": "minimize",
    });
    RunDescription::from_mapping(&raw).context("building the quickcheck run")
}

fn load_run(input: &str, objective_override: Option<&str>) -> Result<RunDescription> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading run description from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading run description from {input}"))?
    };

    let raw: Value = serde_json::from_str(&text).context("parsing run description JSON")?;
    let mut run = RunDescription::from_mapping(&raw).context("validating run description")?;

    if let Some(objective) = objective_override {
        run.objective = objective
            .parse::<Objective>()
            .context("parsing --objective override")?;
    }

    Ok(run)
}
