//! Priority frontier of scored states

use std::{cmp::Ordering, collections::BinaryHeap};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::train::SearchState;

/// Which end of the fitness ranking is expanded first.
///
/// The search is exhaustive either way, so the order only changes how the
/// best train is reached and how large the frontier grows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierOrder {
    /// Expand the fittest state first (depth-first in practice)
    #[default]
    HighestFitness,
    /// Expand the least fit state first (breadth-first in practice)
    LowestFitness,
}

struct Entry {
    key: f64,
    seq: u64,
    state: SearchState,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// Larger key first; among equal keys, the earlier insertion first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-heap of search states keyed by fitness in the configured direction.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    order: FrontierOrder,
    inserted: u64,
}

impl Frontier {
    pub(crate) fn new(order: FrontierOrder) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            inserted: 0,
        }
    }

    pub(crate) fn push(&mut self, state: SearchState) {
        let key = match self.order {
            FrontierOrder::HighestFitness => state.fitness(),
            FrontierOrder::LowestFitness => -state.fitness(),
        };
        self.heap.push(Entry {
            key,
            seq: self.inserted,
            state,
        });
        self.inserted += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
