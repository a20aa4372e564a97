//! Solve command - Find the best train for one objective

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    Objective,
    cli::{
        config::{BudgetArgs, OrderArgs, PoolArgs},
        output,
    },
    export::TrainReport,
    search::{
        CompositeObserver, JsonlObserver, ProgressObserver, SearchConfig, TracingObserver,
        TrainSearch,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Find the best domino train for a pool")]
pub struct SolveArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    /// What to maximize (overrides the config file)
    #[arg(long, short = 'O', value_enum)]
    pub objective: Option<Objective>,

    #[command(flatten)]
    pub order: OrderArgs,

    #[command(flatten)]
    pub budget: BudgetArgs,

    /// Export the report as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,

    /// Show a progress spinner while searching
    #[arg(long)]
    pub progress: bool,

    /// Write every improvement of the best train to this JSON Lines file
    #[arg(long)]
    pub trace: Option<PathBuf>,
}

impl SolveArgs {
    /// The search configuration after applying every override.
    pub fn config(&self) -> Result<SearchConfig> {
        let config = self.pool.resolve()?;
        let objective = self.objective.unwrap_or(config.objective);
        let order = self.order.apply(config.order);
        let budget = self.budget.apply(config.budget);
        Ok(config
            .with_objective(objective)
            .with_order(order)
            .with_budget(budget))
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.config()?;
    let report = run_search(&config, args.progress, args.trace.as_deref())?;

    output::print_report(&report);

    if let Some(path) = args.export {
        report.write_json(&path)?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}

/// Run one search over `config` and summarize it.
pub fn run_search(
    config: &SearchConfig,
    progress: bool,
    trace: Option<&Path>,
) -> Result<TrainReport> {
    let search = TrainSearch::new(config)?;
    info!(
        seed = config.seed,
        objective = %config.objective,
        dominoes = search.pool().len(),
        "solving"
    );

    let mut observers = CompositeObserver::new();
    observers.push(TracingObserver::new());
    if progress {
        observers.push(ProgressObserver::new()?);
    }
    if let Some(path) = trace {
        observers.push(JsonlObserver::create(path)?);
    }

    let outcome = search.run_with_observer(&mut observers)?;
    Ok(TrainReport::new(config, &outcome))
}
