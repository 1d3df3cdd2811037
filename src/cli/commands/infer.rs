//! labelkit infer - Infer labels for a change request

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::infer::{Evidence, LabelEngine, RuleHit};

#[derive(Args, Debug)]
pub struct InferArgs {
    /// Branch the change request was opened from
    #[arg(long, default_value = "")]
    pub branch: String,

    /// Changed file path (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    /// Read changed file paths from a file, one per line
    #[arg(long, value_name = "PATH")]
    pub files_from: Option<PathBuf>,

    /// Show which rule produced each label
    #[arg(long)]
    pub explain: bool,
}

#[derive(Serialize)]
struct InferOutput {
    labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hits: Option<Vec<RuleHit>>,
}

pub fn run(ctx: &AppContext, args: &InferArgs) -> Result<()> {
    let engine = LabelEngine::from_config(ctx.config.inference.clone())?;
    let evidence = build_evidence(args)?;
    let report = engine.explain(&evidence);

    if ctx.robot_mode {
        let output = InferOutput {
            labels: report.labels.into_sorted_vec(),
            hits: args.explain.then_some(report.hits),
        };
        return emit_json(&robot_ok(output));
    }

    if args.explain {
        for hit in &report.hits {
            println!("{}\t{}\t{}", hit.label, hit.rule_id, hit.reason);
        }
    } else {
        for label in &report.labels {
            println!("{label}");
        }
    }
    Ok(())
}

fn build_evidence(args: &InferArgs) -> Result<Evidence> {
    let mut files = args.files.clone();
    if let Some(path) = &args.files_from {
        let raw = std::fs::read_to_string(path)?;
        files.extend(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string),
        );
    }
    Ok(Evidence::new(args.branch.as_str(), files))
}
