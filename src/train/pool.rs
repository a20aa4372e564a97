//! The shared, deduplicated set of tiles available to one search

use std::{collections::HashSet, rc::Rc};

use rand::{Rng, seq::SliceRandom};

use crate::{Domino, Error, Result};

/// Maximum number of distinct tiles a pool can hold.
///
/// Remaining tiles are tracked as a bitmask over pool indices.
pub const POOL_CAPACITY: usize = TileMask::BITS as usize;

/// Bitmask over pool indices.
pub type TileMask = u128;

/// Mask bit for the tile at `index`.
pub fn tile_bit(index: usize) -> TileMask {
    1 << index
}

/// Immutable pool of distinct dominoes, cheap to clone.
///
/// Tiles keep the order in which they were first supplied; later duplicates
/// (including orientation-swapped ones) are dropped.
#[derive(Debug, Clone)]
pub struct Pool {
    tiles: Rc<[Domino]>,
    total_value: u64,
}

impl Pool {
    /// Build a pool from any collection of dominoes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolTooLarge`] when more than [`POOL_CAPACITY`]
    /// distinct tiles are supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use domino_train::{Domino, train::Pool};
    ///
    /// let pool = Pool::new([Domino::new(3, 9), Domino::new(9, 3), Domino::new(1, 1)]).unwrap();
    /// assert_eq!(pool.len(), 2);
    /// assert_eq!(pool.total_value(), 14);
    /// ```
    pub fn new<I>(dominoes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Domino>,
    {
        let mut seen = HashSet::new();
        let tiles: Vec<Domino> = dominoes
            .into_iter()
            .filter(|domino| seen.insert(*domino))
            .collect();

        if tiles.len() > POOL_CAPACITY {
            return Err(Error::PoolTooLarge {
                size: tiles.len(),
                capacity: POOL_CAPACITY,
            });
        }

        let total_value = tiles.iter().map(Domino::value).sum();
        Ok(Self {
            tiles: tiles.into(),
            total_value,
        })
    }

    /// A pool with no tiles.
    pub fn empty() -> Self {
        Self {
            tiles: Rc::from(Vec::new()),
            total_value: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Domino] {
        &self.tiles
    }

    /// Sum of pip values over every tile in the pool.
    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Mask with one bit set per tile.
    pub fn full_mask(&self) -> TileMask {
        match self.tiles.len() {
            POOL_CAPACITY => TileMask::MAX,
            len => tile_bit(len) - 1,
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::empty()
    }
}

/// Draw `count` distinct dominoes from the double-`max_pip` set.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] when the set holds fewer than
/// `count` tiles.
pub fn random_dominoes<R: Rng + ?Sized>(
    count: usize,
    max_pip: u32,
    rng: &mut R,
) -> Result<Vec<Domino>> {
    let mut set: Vec<Domino> = (0..=max_pip)
        .flat_map(|top| (top..=max_pip).map(move |bottom| Domino::new(top, bottom)))
        .collect();

    if count > set.len() {
        return Err(Error::InvalidConfiguration {
            message: format!(
                "cannot draw {count} distinct dominoes from a double-{max_pip} set of {}",
                set.len()
            ),
        });
    }

    set.shuffle(rng);
    set.truncate(count);
    Ok(set)
}
