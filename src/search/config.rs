//! Configuration record for a train search.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use super::frontier::FrontierOrder;
use crate::{Domino, Error, Objective, Result, train::Pool};

/// Optional limits on how long a search may run.
///
/// The default is unlimited, which keeps the search exhaustive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Stop after this many frontier expansions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<u64>,
    /// Stop once this many milliseconds have elapsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_ms: Option<u64>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, expansions: u64) -> Self {
        self.max_expansions = Some(expansions);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_expansions.is_none() && self.time_limit_ms.is_none()
    }

    /// Whether a search that has expanded `expanded` states in `elapsed`
    /// must stop.
    pub fn is_exhausted(&self, expanded: u64, elapsed: Duration) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
            || self.time_limit().is_some_and(|limit| elapsed >= limit)
    }
}

/// Everything one search needs, assembled up front.
///
/// # Examples
///
/// ```
/// use domino_train::{Domino, Objective, SearchConfig};
///
/// let config = SearchConfig::new(7, vec![Domino::new(7, 1), Domino::new(1, 3)])
///     .with_objective(Objective::BySize);
/// assert_eq!(config.pool().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Pip value the first domino must match
    pub seed: u32,
    /// What the search maximizes
    #[serde(default)]
    pub objective: Objective,
    /// Available dominoes; duplicates collapse into one tile
    pub dominoes: Vec<Domino>,
    /// Frontier expansion order
    #[serde(default)]
    pub order: FrontierOrder,
    /// Optional early-stop limits
    #[serde(default, skip_serializing_if = "SearchBudget::is_unlimited")]
    pub budget: SearchBudget,
}

impl SearchConfig {
    /// Create a configuration with the default objective, order and budget.
    pub fn new(seed: u32, dominoes: Vec<Domino>) -> Self {
        Self {
            seed,
            objective: Objective::default(),
            dominoes,
            order: FrontierOrder::default(),
            budget: SearchBudget::default(),
        }
    }

    /// Built-in twelve-tile pool with seed 7.
    pub fn demo() -> Self {
        let pairs: [(u32, u32); 12] = [
            (3, 9),
            (9, 1),
            (3, 7),
            (3, 3),
            (4, 10),
            (4, 5),
            (7, 1),
            (2, 7),
            (4, 2),
            (25, 5),
            (8, 1),
            (25, 7),
        ];
        Self::new(7, pairs.into_iter().map(Domino::from).collect())
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_order(mut self, order: FrontierOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// The deduplicated tile pool.
    pub fn pool(&self) -> Result<Pool> {
        Pool::new(self.dominoes.iter().copied())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| Error::Io {
            operation: format!("write search config {}", path.display()),
            source,
        })
    }
}
