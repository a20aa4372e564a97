//! Common test utilities for the domino-train test suite.
//!
//! Provides an independent brute-force train enumerator and a checker for
//! the matching rules a reported train must obey.

#![allow(dead_code)]

use std::collections::HashMap;

use domino_train::{Domino, SearchState, train::random_dominoes};
use rand::{SeedableRng, rngs::StdRng};

/// Best achievable pip total and tile count for a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BruteForceBest {
    pub value: u64,
    pub size: usize,
}

struct OpenEnd {
    exposed: u32,
    capacity: usize,
    used: usize,
}

/// Enumerate every train that can be built from `pool` starting at `seed`.
///
/// Singles take one continuation and doubles take up to three. The two
/// maxima are tracked independently, since the heaviest and the longest
/// train need not coincide.
pub fn brute_force(seed: u32, pool: &[Domino]) -> BruteForceBest {
    let mut best = BruteForceBest::default();
    let mut placed = vec![false; pool.len()];
    let mut ends = Vec::new();
    explore(seed, pool, &mut placed, &mut ends, 0, 0, &mut best);
    best
}

fn explore(
    seed: u32,
    pool: &[Domino],
    placed: &mut Vec<bool>,
    ends: &mut Vec<OpenEnd>,
    value: u64,
    size: usize,
    best: &mut BruteForceBest,
) {
    best.value = best.value.max(value);
    best.size = best.size.max(size);

    let anchors: Vec<Option<usize>> = if ends.is_empty() {
        vec![None]
    } else {
        (0..ends.len())
            .filter(|&i| ends[i].used < ends[i].capacity)
            .map(Some)
            .collect()
    };

    for anchor in anchors {
        let pips = anchor.map_or(seed, |i| ends[i].exposed);
        for tile in 0..pool.len() {
            if placed[tile] {
                continue;
            }
            let domino = pool[tile];
            let exposed = if domino.top() == pips {
                domino.bottom()
            } else if domino.bottom() == pips {
                domino.top()
            } else {
                continue;
            };

            placed[tile] = true;
            if let Some(i) = anchor {
                ends[i].used += 1;
            }
            ends.push(OpenEnd {
                exposed,
                capacity: if domino.is_double() { 3 } else { 1 },
                used: 0,
            });

            explore(
                seed,
                pool,
                placed,
                ends,
                value + domino.value(),
                size + 1,
                best,
            );

            ends.pop();
            if let Some(i) = anchor {
                ends[i].used -= 1;
            }
            placed[tile] = false;
        }
    }
}

/// Assert the train of `state` joins matching pips, respects the branching
/// caps and conserves the pool.
pub fn assert_valid_train(state: &SearchState, seed: u32) {
    let train = state.partial();
    assert_eq!(
        train.train_value() + train.remaining_value(),
        train.pool().total_value()
    );
    assert_eq!(
        train.train_size() + train.remaining_size(),
        train.pool().len()
    );

    let edges = train.edges();
    assert_eq!(edges.len(), train.train_size());
    let Some(first) = edges.first() else {
        return;
    };
    assert_eq!(first.from, Domino::double(seed), "train must start at the seed");

    for edge in &edges {
        assert_eq!(
            edge.from.bottom(),
            edge.to.top(),
            "edge {} -> {} does not share a pip",
            edge.from,
            edge.to
        );
    }

    // The first edge leaves the engine; the rest leave placed tiles.
    let mut children: HashMap<Domino, usize> = HashMap::new();
    for edge in &edges[1..] {
        *children.entry(edge.from).or_default() += 1;
    }
    for (parent, count) in children {
        let cap = if parent.is_double() { 3 } else { 1 };
        assert!(count <= cap, "{parent} has {count} continuations");
    }
}

/// Reproducible random pool of `count` distinct tiles.
pub fn random_pool(rng_seed: u64, count: usize, max_pip: u32) -> Vec<Domino> {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    random_dominoes(count, max_pip, &mut rng).expect("double set is large enough")
}

pub fn dominoes(pairs: &[(u32, u32)]) -> Vec<Domino> {
    pairs.iter().copied().map(Domino::from).collect()
}
