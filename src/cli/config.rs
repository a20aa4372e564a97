//! Shared argument groups for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Domino,
    search::{FrontierOrder, SearchBudget, SearchConfig},
    train::random_dominoes,
};

/// Where the domino pool comes from.
///
/// Exactly one source is used: a config file, explicit dominoes, a random
/// draw, or (when none is given) the built-in demo pool.
#[derive(Args, Debug, Clone, Default)]
pub struct PoolArgs {
    /// JSON search configuration file
    #[arg(long, conflicts_with_all = ["dominoes", "random"])]
    pub config: Option<PathBuf>,

    /// Pip value the first domino must match (overrides the config file)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Domino in the pool, e.g. 3-9 (repeatable)
    #[arg(long = "domino", short = 'd', conflicts_with = "random")]
    pub dominoes: Vec<Domino>,

    /// Draw this many distinct dominoes at random
    #[arg(long)]
    pub random: Option<usize>,

    /// Highest pip value of the random set (double-N)
    #[arg(long, default_value_t = 12)]
    pub max_pip: u32,

    /// Random seed for reproducible random pools
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

impl PoolArgs {
    /// Assemble the search configuration these arguments describe.
    pub fn resolve(&self) -> Result<SearchConfig> {
        if let Some(path) = &self.config {
            let mut config = SearchConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            if let Some(seed) = self.seed {
                config.seed = seed;
            }
            return Ok(config);
        }

        if let Some(count) = self.random {
            let mut rng = match self.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let dominoes = random_dominoes(count, self.max_pip, &mut rng)?;
            return Ok(SearchConfig::new(
                self.seed.unwrap_or(self.max_pip),
                dominoes,
            ));
        }

        if !self.dominoes.is_empty() {
            let Some(seed) = self.seed else {
                bail!("--seed is required when dominoes are given with --domino");
            };
            return Ok(SearchConfig::new(seed, self.dominoes.clone()));
        }

        let mut config = SearchConfig::demo();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

/// Optional search limits.
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Stop after this many expansions and report the best train so far
    #[arg(long)]
    pub max_expansions: Option<u64>,

    /// Stop after this many milliseconds and report the best train so far
    #[arg(long)]
    pub time_limit_ms: Option<u64>,
}

impl BudgetArgs {
    /// Overlay these limits on `budget`; unset flags keep its values.
    pub fn apply(&self, budget: SearchBudget) -> SearchBudget {
        SearchBudget {
            max_expansions: self.max_expansions.or(budget.max_expansions),
            time_limit_ms: self.time_limit_ms.or(budget.time_limit_ms),
        }
    }
}

/// Frontier order flag shared by commands.
#[derive(Args, Debug, Clone, Default)]
pub struct OrderArgs {
    /// Which end of the fitness ranking to expand first
    #[arg(long, value_enum)]
    pub order: Option<FrontierOrder>,
}

impl OrderArgs {
    pub fn apply(&self, order: FrontierOrder) -> FrontierOrder {
        self.order.unwrap_or(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pool_is_the_fallback() {
        let config = PoolArgs::default().resolve().unwrap();
        assert_eq!(config, SearchConfig::demo());
    }

    #[test]
    fn explicit_dominoes_need_a_seed() {
        let args = PoolArgs {
            dominoes: vec![Domino::new(3, 4)],
            ..PoolArgs::default()
        };
        assert!(args.resolve().is_err());

        let args = PoolArgs {
            seed: Some(3),
            ..args
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.dominoes, vec![Domino::new(3, 4)]);
    }

    #[test]
    fn random_pool_is_reproducible() {
        let args = PoolArgs {
            random: Some(8),
            max_pip: 6,
            rng_seed: Some(11),
            ..PoolArgs::default()
        };
        let first = args.resolve().unwrap();
        let second = args.resolve().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, 6);
        assert_eq!(first.dominoes.len(), 8);
    }

    #[test]
    fn budget_flags_override_config() {
        let base = SearchBudget::default().with_max_expansions(10);
        let args = BudgetArgs {
            max_expansions: None,
            time_limit_ms: Some(30),
        };
        let budget = args.apply(base);
        assert_eq!(budget.max_expansions, Some(10));
        assert_eq!(budget.time_limit_ms, Some(30));
    }
}
