//! Exhaustive best-first train search
//!
//! Every successor is a freshly built state and nothing is merged or pruned,
//! so the loop enumerates every reachable train. The frontier ordering only
//! decides which trains are visited first.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    config::{SearchBudget, SearchConfig},
    frontier::{Frontier, FrontierOrder},
};
use crate::{
    Objective, Result,
    ports::{NullObserver, SearchObserver},
    scoring::{Distance, Heuristic},
    train::{Pool, SearchState},
};

/// How the search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Completion {
    /// The frontier emptied: the best state is optimal.
    Exhausted,
    /// The budget ran out first: the best state is the best seen so far.
    BudgetExhausted,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// States popped from the frontier
    pub expanded: u64,
    /// Successors scored and pushed onto the frontier
    pub generated: u64,
    /// Largest frontier size observed
    pub peak_frontier: usize,
    /// Times the best state changed
    pub improvements: u64,
    pub elapsed: Duration,
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: SearchState,
    pub stats: SearchStats,
    pub completion: Completion,
}

impl SearchOutcome {
    /// True when every reachable train was visited.
    pub fn is_optimal(&self) -> bool {
        self.completion == Completion::Exhausted
    }
}

/// The train search engine.
///
/// Built once from an immutable configuration; [`TrainSearch::run`] can be
/// called any number of times and always yields the same optimum.
///
/// # Examples
///
/// ```
/// use domino_train::{Domino, SearchConfig, TrainSearch};
///
/// let config = SearchConfig::new(
///     6,
///     vec![Domino::new(6, 2), Domino::new(2, 2), Domino::new(2, 5), Domino::new(4, 4)],
/// );
/// let best = TrainSearch::new(&config).unwrap().solve().unwrap();
/// assert_eq!(best.partial().train_value(), 19);
/// assert_eq!(best.partial().remaining_size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TrainSearch<D = Objective, H = Objective> {
    distance: D,
    heuristic: H,
    seed: u32,
    pool: Pool,
    order: FrontierOrder,
    budget: SearchBudget,
}

impl TrainSearch {
    /// Engine for the configured objective, order and budget.
    ///
    /// # Errors
    ///
    /// Fails when the configured dominoes do not fit in a [`Pool`].
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let pool = config.pool()?;
        Ok(
            Self::with_strategies(config.objective, config.objective, config.seed, pool)
                .with_order(config.order)
                .with_budget(config.budget),
        )
    }
}

impl<D: Distance, H: Heuristic> TrainSearch<D, H> {
    /// Engine with custom scoring strategies.
    pub fn with_strategies(distance: D, heuristic: H, seed: u32, pool: Pool) -> Self {
        Self {
            distance,
            heuristic,
            seed,
            pool,
            order: FrontierOrder::default(),
            budget: SearchBudget::default(),
        }
    }

    pub fn with_order(mut self, order: FrontierOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Run the search and return only the best state.
    pub fn solve(&self) -> Result<SearchState> {
        Ok(self.run()?.best)
    }

    /// Run the search without an observer.
    pub fn run(&self) -> Result<SearchOutcome> {
        self.run_with_observer(&mut NullObserver)
    }

    /// Run the search, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Stops at the first error an observer hook returns and passes it on.
    pub fn run_with_observer(
        &self,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchOutcome> {
        let started = Instant::now();
        debug!(
            seed = self.seed,
            pool = self.pool.len(),
            order = ?self.order,
            "starting train search"
        );
        observer.on_search_start(self.pool.len())?;

        let initial = SearchState::initial(&self.pool, &self.heuristic);
        let mut best = initial.clone();
        let mut frontier = Frontier::new(self.order);
        frontier.push(initial);

        let mut stats = SearchStats {
            peak_frontier: 1,
            ..SearchStats::default()
        };
        let mut completion = Completion::Exhausted;

        loop {
            if self.budget.is_exhausted(stats.expanded, started.elapsed()) {
                completion = Completion::BudgetExhausted;
                break;
            }
            let Some(current) = frontier.pop() else {
                break;
            };

            stats.expanded += 1;
            observer.on_expand(stats.expanded, frontier.len())?;

            if current.fitness() > best.fitness() {
                stats.improvements += 1;
                debug!(
                    value = current.value(),
                    fitness = current.fitness(),
                    train_size = current.partial().train_size(),
                    "new best train"
                );
                observer.on_improvement(&current)?;
            }
            best = best.max(current.clone());

            for successor in current.successors(self.seed) {
                let value = current.value()
                    + self
                        .distance
                        .between(current.partial(), successor.partial());
                if value > successor.value() {
                    frontier.push(successor.with_utility(value, &self.heuristic));
                    stats.generated += 1;
                }
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        stats.elapsed = started.elapsed();
        debug!(
            expanded = stats.expanded,
            generated = stats.generated,
            peak_frontier = stats.peak_frontier,
            ?completion,
            "train search finished"
        );
        observer.on_search_end(&stats)?;

        Ok(SearchOutcome {
            best,
            stats,
            completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Domino, train::PartialTrainState};

    fn config(seed: u32, tiles: &[(u32, u32)]) -> SearchConfig {
        SearchConfig::new(seed, tiles.iter().copied().map(Domino::from).collect())
    }

    #[test]
    fn empty_pool_yields_empty_train() {
        let outcome = TrainSearch::new(&config(4, &[])).unwrap().run().unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.best.value(), 0.0);
        assert_eq!(outcome.best.partial().train_size(), 0);
        assert_eq!(outcome.stats.expanded, 1);
        assert_eq!(outcome.stats.generated, 0);
    }

    #[test]
    fn unmatched_seed_yields_empty_train() {
        let best = TrainSearch::new(&config(6, &[(1, 2), (2, 3)])).unwrap().solve().unwrap();
        assert_eq!(best.partial().train_size(), 0);
        assert_eq!(best.partial().remaining_size(), 2);
        assert_eq!(best.value(), 0.0);
    }

    #[test]
    fn chooses_heavier_branch_by_value_and_longer_by_size() {
        // 6-1, 1-2, 2-3 is long and light; 6-10 alone is short and heavy.
        let tiles = [(6, 1), (1, 2), (2, 3), (6, 10)];

        let by_value = TrainSearch::new(&config(6, &tiles)).unwrap().solve().unwrap();
        assert_eq!(by_value.partial().train_value(), 16);
        assert_eq!(by_value.partial().train_size(), 1);
        assert_eq!(by_value.value(), 16.0);

        let by_size = TrainSearch::new(&config(6, &tiles).with_objective(Objective::BySize))
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(by_size.partial().train_size(), 3);
        assert_eq!(by_size.value(), 3.0);
    }

    #[test]
    fn counts_every_train_including_duplicate_orderings() {
        // 5-5 off the seed, then 5-1 and 5-2 in either order: the two-child
        // train is reached twice.
        let outcome = TrainSearch::new(&config(5, &[(5, 5), (5, 1), (5, 2)]))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcome.best.partial().train_size(), 3);
        // empty, three one-tile trains, two two-tile trains, two three-tile trains
        assert_eq!(outcome.stats.expanded, 8);
        assert_eq!(outcome.stats.generated, 7);
    }

    #[test]
    fn budget_stops_early_with_best_so_far() {
        let search = TrainSearch::new(
            &SearchConfig::demo().with_budget(SearchBudget::default().with_max_expansions(1)),
        )
        .unwrap();
        let outcome = search.run().unwrap();
        assert_eq!(outcome.completion, Completion::BudgetExhausted);
        assert!(!outcome.is_optimal());
        assert_eq!(outcome.stats.expanded, 1);
        assert_eq!(outcome.best.partial().train_size(), 0);
    }

    #[test]
    fn custom_strategies_are_used() {
        // Reward every placement equally and estimate nothing: a size search.
        let pool = config(6, &[(6, 1), (1, 2), (2, 3), (6, 10)]).pool().unwrap();
        let search = TrainSearch::with_strategies(
            |_: &PartialTrainState, _: &PartialTrainState| 1.0,
            |_: &PartialTrainState| 0.0,
            6,
            pool,
        );
        let best = search.solve().unwrap();
        assert_eq!(best.partial().train_size(), 3);
        assert_eq!(best.fitness(), 3.0);
    }

    #[derive(Default)]
    struct Recorder {
        started: Option<usize>,
        expansions: u64,
        improvements: Vec<f64>,
        finished: bool,
    }

    impl SearchObserver for Recorder {
        fn on_search_start(&mut self, pool_size: usize) -> Result<()> {
            self.started = Some(pool_size);
            Ok(())
        }

        fn on_expand(&mut self, expanded: u64, _frontier_len: usize) -> Result<()> {
            self.expansions = expanded;
            Ok(())
        }

        fn on_improvement(&mut self, best: &SearchState) -> Result<()> {
            self.improvements.push(best.fitness());
            Ok(())
        }

        fn on_search_end(&mut self, _stats: &SearchStats) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    struct StopAfter {
        limit: u64,
        seen: u64,
    }

    impl SearchObserver for StopAfter {
        fn on_expand(&mut self, expanded: u64, _frontier_len: usize) -> Result<()> {
            self.seen = expanded;
            if expanded >= self.limit {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("stopped after {expanded} expansions"),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn observer_error_aborts_search() {
        let search = TrainSearch::new(&SearchConfig::demo()).unwrap();
        let mut observer = StopAfter { limit: 3, seen: 0 };
        let err = search.run_with_observer(&mut observer).unwrap_err();

        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
        assert_eq!(observer.seen, 3);
    }

    #[test]
    fn observer_sees_lifecycle() {
        let search = TrainSearch::new(&config(6, &[(6, 1), (1, 2), (6, 9)])).unwrap();
        let mut recorder = Recorder::default();
        let outcome = search.run_with_observer(&mut recorder).unwrap();

        assert_eq!(recorder.started, Some(3));
        assert_eq!(recorder.expansions, outcome.stats.expanded);
        assert_eq!(recorder.improvements.len() as u64, outcome.stats.improvements);
        assert!(recorder.improvements.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(recorder.improvements.last().copied(), Some(outcome.best.fitness()));
        assert!(recorder.finished);
    }
}
