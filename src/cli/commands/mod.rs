//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod filter;
pub mod infer;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer labels for a change request
    Infer(infer::InferArgs),

    /// Filter resources by a label selector
    Filter(filter::FilterArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Infer(args) => infer::run(ctx, args),
        Commands::Filter(args) => filter::run(ctx, args),
    }
}
