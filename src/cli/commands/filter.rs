//! labelkit filter - Filter resources by a label selector

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::selector::{
    Database, FilterReport, Selector, filter_with_report, par_filter_with_report,
};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Selector as comma-separated key=value pairs (defaults to [selector] in config)
    #[arg(long)]
    pub selector: Option<String>,

    /// JSON file holding an array of databases
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Evaluate resources in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Also list resources that were dropped
    #[arg(long)]
    pub show_dropped: bool,
}

#[derive(Serialize)]
struct FilterOutput {
    selector: Selector,
    matched: Vec<Database>,
    dropped: Vec<Diagnostic>,
}

pub fn run(ctx: &AppContext, args: &FilterArgs) -> Result<()> {
    let selector = match &args.selector {
        Some(raw) => Selector::parse(raw)?,
        None => ctx.config.selector.selector(),
    };
    let databases = read_databases(&args.input)?;

    let report: FilterReport<Database> = if args.parallel {
        par_filter_with_report(&selector, databases)
    } else {
        filter_with_report(&selector, databases)
    };

    if ctx.robot_mode {
        let warnings = report.failures().map(ToString::to_string).collect();
        let mut response = robot_ok(FilterOutput {
            selector,
            matched: report.matched,
            dropped: report.diagnostics,
        });
        response.warnings = warnings;
        return emit_json(&response);
    }

    for database in &report.matched {
        println!("{}", database.name);
    }
    if args.show_dropped {
        for diagnostic in &report.diagnostics {
            eprintln!("{diagnostic}");
        }
    }
    Ok(())
}

fn read_databases(path: &Path) -> Result<Vec<Database>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
