//! Observer port - abstraction for watching a train search
//!
//! This port defines the interface for observing search events, so that
//! progress reporting and logging stay out of the expansion loop.

use crate::{Result, search::SearchStats, train::SearchState};

/// Observer trait for monitoring a search
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_search_start(pool_size)` - Once at the beginning
/// 2. For each state popped from the frontier:
///    - `on_expand(expanded, frontier_len)`
///    - `on_improvement(best)` - When the popped state becomes the new best
/// 3. `on_search_end(stats)` - Once at the end, also after a budget stop
///
/// Every hook returns a `Result`. An error stops the search at once and is
/// returned from [`TrainSearch::run_with_observer`](crate::TrainSearch::run_with_observer);
/// `on_search_end` is not called in that case.
///
/// # Examples
///
/// ```
/// use domino_train::{ports::SearchObserver, train::SearchState};
///
/// #[derive(Default)]
/// struct BestTracker {
///     improvements: usize,
/// }
///
/// impl SearchObserver for BestTracker {
///     fn on_improvement(&mut self, _best: &SearchState) -> domino_train::Result<()> {
///         self.improvements += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called before the first expansion.
    ///
    /// # Parameters
    ///
    /// * `pool_size` - Number of distinct tiles available to the search
    fn on_search_start(&mut self, _pool_size: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a state is popped from the frontier.
    ///
    /// # Parameters
    ///
    /// * `expanded` - Number of states expanded so far, including this one
    /// * `frontier_len` - Frontier size after the pop
    fn on_expand(&mut self, _expanded: u64, _frontier_len: usize) -> Result<()> {
        Ok(())
    }

    /// Called whenever the best state seen so far changes.
    fn on_improvement(&mut self, _best: &SearchState) -> Result<()> {
        Ok(())
    }

    /// Called once the loop stops.
    fn on_search_end(&mut self, _stats: &SearchStats) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
