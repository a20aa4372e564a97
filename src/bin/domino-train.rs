//! domino-train CLI - Find the best Mexican-train chain for a pool of dominoes
//!
//! This CLI provides:
//! - Solving a pool for the highest pip total or the longest train
//! - Comparing both objectives on the same pool
//! - JSON export of the winning train

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domino-train")]
#[command(version, about = "Exhaustive search for optimal domino trains", long_about = None)]
struct Cli {
    /// Log search progress at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best train for one objective
    Solve(domino_train::cli::commands::solve::SolveArgs),

    /// Solve the same pool by value and by size
    Compare(domino_train::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "domino_train=debug"
    } else {
        "domino_train=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => domino_train::cli::commands::solve::execute(args),
        Commands::Compare(args) => domino_train::cli::commands::compare::execute(args),
    }
}
