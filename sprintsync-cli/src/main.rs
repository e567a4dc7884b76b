//! Sprintsync — project-document synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! sprintsync run [--project-root <path>] [--completion <pct>] [--report-config <yaml>]
//! sprintsync daily [--project-root <path>]
//! ```
//!
//! `run` executes the full pipeline (task matrix, backlog, system
//! state, daily standup, sprint report); `daily` creates only the
//! daily standup. A failed step prints which step failed and exits
//! non-zero.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{daily::DailyArgs, run::RunArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sprintsync",
    version,
    about = "Keep project-status markdown documents in sync with the sprint calendar",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full synchronization pipeline.
    Run(RunArgs),

    /// Create today's daily standup from its template and stop.
    Daily(DailyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Daily(args) => args.run(),
    }
}
