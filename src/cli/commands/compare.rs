//! Compare command - Solve the same pool under both objectives

use anyhow::Result;
use clap::Parser;

use crate::{
    Objective,
    cli::{
        commands::solve::run_search,
        config::{BudgetArgs, OrderArgs, PoolArgs},
        output,
    },
    export::TrainReport,
};

#[derive(Parser, Debug)]
#[command(about = "Compare the by-value and by-size trains for one pool")]
pub struct CompareArgs {
    #[command(flatten)]
    pub pool: PoolArgs,

    #[command(flatten)]
    pub order: OrderArgs,

    #[command(flatten)]
    pub budget: BudgetArgs,

    /// Print both trains edge by edge
    #[arg(long)]
    pub show_trains: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let reports = compare(&args)?;

    output::print_section("Objective comparison");
    println!(
        "  {:10} {:>8} {:>8} {:>8} {:>8} {:>12}",
        "objective", "tiles", "pips", "left", "left pips", "expanded"
    );
    for report in &reports {
        println!(
            "  {:10} {:>8} {:>8} {:>8} {:>8} {:>12}",
            report.objective.as_str(),
            report.train_size,
            report.train_value,
            report.remaining_size,
            report.remaining_value,
            output::format_number(report.stats.expanded),
        );
    }

    if args.show_trains {
        for report in &reports {
            output::print_subsection(&format!("{} train", report.objective));
            for line in output::format_edges(report) {
                println!("  {line}");
            }
        }
    }

    Ok(())
}

/// One report per objective, by-value first.
pub fn compare(args: &CompareArgs) -> Result<Vec<TrainReport>> {
    let base = args.pool.resolve()?;
    let order = args.order.apply(base.order);
    let budget = args.budget.apply(base.budget);

    [Objective::ByValue, Objective::BySize]
        .into_iter()
        .map(|objective| {
            let config = base
                .clone()
                .with_objective(objective)
                .with_order(order)
                .with_budget(budget);
            run_search(&config, false, None)
        })
        .collect()
}
