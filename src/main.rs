//! labelkit - change-request label inference and label selector filtering

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use labelkit::LabelError;
use labelkit::app::AppContext;
use labelkit::cli::output::{emit_json, error_code, robot_error};
use labelkit::cli::{Cli, commands};
use labelkit::config::robot_from_env;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            // Config didn't load; only the flag and env can ask for robot mode.
            let robot = cli.robot || robot_from_env().unwrap_or(false);
            init_tracing(cli.quiet, cli.verbose, robot);
            return report_error(&e, robot);
        }
    };
    init_tracing(cli.quiet, ctx.verbosity, ctx.robot_mode);

    match commands::run(&ctx, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e, ctx.robot_mode),
    }
}

fn report_error(e: &LabelError, robot: bool) -> ExitCode {
    if robot {
        // Robot mode: JSON error output to stdout
        if emit_json(&robot_error(error_code(e), e.to_string())).is_err() {
            eprintln!("Error: {e}");
        }
    } else {
        eprintln!("Error: {e}");
    }
    ExitCode::FAILURE
}

/// Log directives used when `RUST_LOG` is unset.
const fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,labelkit=info",
        1 => "info,labelkit=debug",
        2 => "debug,labelkit=trace",
        _ => "trace",
    }
}

/// Logs always go to stderr; robot mode switches them to JSON lines.
fn init_tracing(quiet: bool, verbosity: u8, robot: bool) {
    if quiet {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    let json = robot.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let human = (!robot).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(human)
        .init();
}
