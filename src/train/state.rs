//! Scored search states and successor generation

use std::{cmp::Ordering, fmt};

use super::{
    partial::{Anchor, PartialTrainState},
    pool::Pool,
};
use crate::{Domino, scoring::Heuristic};

/// Most outgoing edges a double may carry.
pub const DOUBLE_BRANCHES: usize = 3;

/// Most outgoing edges any other domino may carry.
pub const SINGLE_BRANCHES: usize = 1;

/// A partial train together with its accumulated value and ranking fitness.
///
/// `value` is the distance accumulated from the empty train; `fitness` is
/// `value - heuristic(state)`. States are never changed once built:
/// [`SearchState::with_utility`] returns a rescored copy.
#[derive(Debug, Clone)]
pub struct SearchState {
    partial: PartialTrainState,
    value: f64,
    fitness: f64,
}

impl SearchState {
    /// The empty train over `pool`, with `value = 0`.
    pub fn initial<H: Heuristic + ?Sized>(pool: &Pool, heuristic: &H) -> Self {
        let partial = PartialTrainState::initial(pool);
        let fitness = -heuristic.estimate(&partial);
        Self {
            partial,
            value: 0.0,
            fitness,
        }
    }

    /// Copy of this state scored with the given accumulated value.
    pub fn with_utility<H: Heuristic + ?Sized>(self, value: f64, heuristic: &H) -> Self {
        let fitness = value - heuristic.estimate(&self.partial);
        Self {
            partial: self.partial,
            value,
            fitness,
        }
    }

    pub fn partial(&self) -> &PartialTrainState {
        &self.partial
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whichever of the two states ranks higher; ties keep `self`.
    pub fn max(self, other: SearchState) -> SearchState {
        if self.fitness.total_cmp(&other.fitness) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Every train reachable by placing one more domino.
    ///
    /// While the train is empty, each remaining domino carrying `seed` starts
    /// a new train. Afterwards, every leaf is offered every remaining domino
    /// that matches its exposed value. Successors carry `-inf` placeholder
    /// scores until the engine rescores them.
    pub fn successors(&self, seed: u32) -> Vec<SearchState> {
        if self.partial.is_empty() {
            return self
                .partial
                .remaining()
                .filter_map(|(tile, domino)| {
                    domino
                        .oriented(seed)
                        .map(|oriented| self.successor(tile, oriented, Anchor::Seed(seed)))
                })
                .collect();
        }

        let mut successors = Vec::new();
        for (node, leaf) in self.leaves() {
            for (tile, domino) in self.partial.remaining() {
                if let Some(oriented) = domino.oriented_against(&leaf) {
                    successors.push(self.successor(tile, oriented, Anchor::Node(node)));
                }
            }
        }
        successors
    }

    /// Nodes that may still receive an edge, with their oriented dominoes.
    ///
    /// A single is a leaf while it has no continuation. A double stays a
    /// leaf below [`DOUBLE_BRANCHES`] continuations, but only while some
    /// remaining tile could still be joined to it.
    pub fn leaves(&self) -> Vec<(usize, Domino)> {
        let degrees = self.partial.out_degrees();
        self.partial
            .placements()
            .into_iter()
            .enumerate()
            .filter(|(node, placement)| {
                let domino = placement.domino;
                if domino.is_double() {
                    degrees[*node] < DOUBLE_BRANCHES && self.is_satisfiable(&domino)
                } else {
                    degrees[*node] < SINGLE_BRANCHES
                }
            })
            .map(|(node, placement)| (node, placement.domino))
            .collect()
    }

    fn is_satisfiable(&self, leaf: &Domino) -> bool {
        self.partial
            .remaining()
            .any(|(_, domino)| domino.oriented_against(leaf).is_some())
    }

    fn successor(&self, tile: usize, oriented: Domino, anchor: Anchor) -> SearchState {
        SearchState {
            partial: self.partial.extended(tile, oriented, anchor),
            value: f64::NEG_INFINITY,
            fitness: f64::NEG_INFINITY,
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchState(value={}, fitness={}, train={} tiles/{} pips, remaining={} tiles/{} pips)",
            self.value,
            self.fitness,
            self.partial.train_size(),
            self.partial.train_value(),
            self.partial.remaining_size(),
            self.partial.remaining_value(),
        )
    }
}
