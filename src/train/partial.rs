//! Immutable snapshot of a partially built train
//!
//! The train is stored as a persistent chain of placements: every successor
//! shares its predecessor's chain and adds one link, so branching costs one
//! allocation regardless of train length.

use std::{iter, rc::Rc};

use serde::{Deserialize, Serialize};

use super::pool::{Pool, TileMask, tile_bit};
use crate::Domino;

/// What a placed domino is joined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The seed pip value the train starts from.
    Seed(u32),
    /// An earlier placement, by placement index.
    Node(usize),
}

/// One domino placed in the train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the tile in the pool
    pub tile: usize,
    /// The tile oriented so that `top` joins the anchor and `bottom` is exposed
    pub domino: Domino,
    pub anchor: Anchor,
}

/// Directed edge of the train graph.
///
/// The first edge of every train leaves the seed, which is not a tile; its
/// `from` is the engine double `(seed, seed)`. When the pool's own
/// `(seed, seed)` tile is placed first, that edge reads `5-5 -> 5-5` for
/// seed 5: engine to tile, not a self-loop. Every later edge joins two
/// placed tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainEdge {
    pub from: Domino,
    pub to: Domino,
}

#[derive(Debug)]
struct Link {
    placement: Placement,
    prev: Option<Rc<Link>>,
}

/// Placed train plus the tiles not yet placed.
///
/// Placed and remaining tiles are disjoint and together make up the pool.
#[derive(Debug, Clone)]
pub struct PartialTrainState {
    pool: Pool,
    chain: Option<Rc<Link>>,
    remaining: TileMask,
    train_size: usize,
    train_value: u64,
}

impl PartialTrainState {
    /// Empty train with the whole pool remaining.
    pub fn initial(pool: &Pool) -> Self {
        Self {
            pool: pool.clone(),
            chain: None,
            remaining: pool.full_mask(),
            train_size: 0,
            train_value: 0,
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Number of placed dominoes.
    pub fn train_size(&self) -> usize {
        self.train_size
    }

    /// Sum of pip values over the placed dominoes.
    pub fn train_value(&self) -> u64 {
        self.train_value
    }

    pub fn remaining_size(&self) -> usize {
        self.remaining.count_ones() as usize
    }

    pub fn remaining_value(&self) -> u64 {
        self.pool.total_value() - self.train_value
    }

    /// True until the first domino has been placed.
    pub fn is_empty(&self) -> bool {
        self.chain.is_none()
    }

    pub fn is_remaining(&self, tile: usize) -> bool {
        tile < self.pool.len() && self.remaining & tile_bit(tile) != 0
    }

    /// Remaining tiles with their pool indices, in pool order.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, Domino)> + '_ {
        self.pool
            .tiles()
            .iter()
            .copied()
            .enumerate()
            .filter(|(tile, _)| self.is_remaining(*tile))
    }

    /// Placements in the order they were made; a placement's index is its
    /// node id.
    pub fn placements(&self) -> Vec<Placement> {
        let mut placements: Vec<Placement> = self.links().map(|link| link.placement).collect();
        placements.reverse();
        placements
    }

    /// Out-degree of every node, indexed by node id.
    pub fn out_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.train_size];
        for link in self.links() {
            if let Anchor::Node(parent) = link.placement.anchor {
                degrees[parent] += 1;
            }
        }
        degrees
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.links()
            .filter(|link| link.placement.anchor == Anchor::Node(node))
            .count()
    }

    /// Train edges in placement order.
    pub fn edges(&self) -> Vec<TrainEdge> {
        let placements = self.placements();
        placements
            .iter()
            .map(|placement| TrainEdge {
                from: match placement.anchor {
                    Anchor::Seed(seed) => Domino::double(seed),
                    Anchor::Node(parent) => placements[parent].domino,
                },
                to: placement.domino,
            })
            .collect()
    }

    /// New state with `domino` (tile `tile`, already oriented) joined to
    /// `anchor`. The receiver is left untouched.
    pub(super) fn extended(&self, tile: usize, domino: Domino, anchor: Anchor) -> Self {
        debug_assert!(self.is_remaining(tile));
        let link = Link {
            placement: Placement {
                tile,
                domino,
                anchor,
            },
            prev: self.chain.clone(),
        };
        Self {
            pool: self.pool.clone(),
            chain: Some(Rc::new(link)),
            remaining: self.remaining & !tile_bit(tile),
            train_size: self.train_size + 1,
            train_value: self.train_value + domino.value(),
        }
    }

    fn links(&self) -> impl Iterator<Item = &Link> {
        iter::successors(self.chain.as_deref(), |link| link.prev.as_deref())
    }
}
