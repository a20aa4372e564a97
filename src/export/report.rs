//! JSON report of the best train found by a search

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Domino, Error, Objective, Result,
    search::{Completion, SearchConfig, SearchOutcome, SearchStats},
    train::TrainEdge,
};

/// Condensed [`SearchStats`] with the elapsed time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub expanded: u64,
    pub generated: u64,
    pub peak_frontier: usize,
    pub improvements: u64,
    pub elapsed_ms: f64,
}

impl From<&SearchStats> for StatsSummary {
    fn from(stats: &SearchStats) -> Self {
        Self {
            expanded: stats.expanded,
            generated: stats.generated,
            peak_frontier: stats.peak_frontier,
            improvements: stats.improvements,
            elapsed_ms: stats.elapsed.as_secs_f64() * 1_000.0,
        }
    }
}

/// Everything worth keeping about a finished search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub seed: u32,
    pub objective: Objective,
    pub completion: Completion,
    /// Placed edges in placement order; the seed appears as a double
    pub edges: Vec<TrainEdge>,
    pub train_size: usize,
    pub train_value: u64,
    pub remaining: Vec<Domino>,
    pub remaining_size: usize,
    pub remaining_value: u64,
    pub value: f64,
    pub fitness: f64,
    pub stats: StatsSummary,
}

impl TrainReport {
    /// Build a report for `outcome`, produced by a search over `config`.
    pub fn new(config: &SearchConfig, outcome: &SearchOutcome) -> Self {
        let train = outcome.best.partial();
        Self {
            seed: config.seed,
            objective: config.objective,
            completion: outcome.completion,
            edges: train.edges(),
            train_size: train.train_size(),
            train_value: train.train_value(),
            remaining: train.remaining().map(|(_, domino)| domino).collect(),
            remaining_size: train.remaining_size(),
            remaining_value: train.remaining_value(),
            value: outcome.best.value(),
            fitness: outcome.best.fitness(),
            stats: StatsSummary::from(&outcome.stats),
        }
    }

    /// Pip total over placed and remaining tiles.
    pub fn pool_value(&self) -> u64 {
        self.train_value + self.remaining_value
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create report directory {}", parent.display()),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| Error::Io {
            operation: format!("write report {}", path.display()),
            source,
        })
    }

    /// Read a report previously written with [`TrainReport::write_json`].
    pub fn read_json(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read report {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
