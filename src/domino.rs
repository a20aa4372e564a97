//! The domino tile and its orientation primitives
//!
//! A domino has a "top" and a "bottom", but the ordering does not affect
//! equality: `(1, 2)` and `(2, 1)` are the same tile. The ordering only
//! matters once a tile is placed in a train, where `top` is the side joined
//! to the predecessor and `bottom` is the exposed side.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single domino tile: an unordered pair of pip counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Domino {
    top: u32,
    bottom: u32,
}

impl Domino {
    /// Create a domino with the given top and bottom pips.
    ///
    /// # Examples
    ///
    /// ```
    /// use domino_train::Domino;
    ///
    /// assert_eq!(Domino::new(3, 9), Domino::new(9, 3));
    /// assert_eq!(Domino::new(3, 9).value(), 12);
    /// ```
    pub const fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }

    /// Create the double `(pips, pips)`.
    pub const fn double(pips: u32) -> Self {
        Self::new(pips, pips)
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Total pip count of the tile.
    ///
    /// Widened to `u64` so that any pair of `u32` pip counts sums exactly.
    pub fn value(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }

    pub fn is_double(&self) -> bool {
        self.top == self.bottom
    }

    pub fn contains(&self, pips: u32) -> bool {
        self.top == pips || self.bottom == pips
    }

    /// The same tile with top and bottom swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.bottom, self.top)
    }

    /// Orient this domino so that its top equals `pips`.
    ///
    /// Returns `None` when the tile carries no such pip count.
    ///
    /// # Examples
    ///
    /// ```
    /// use domino_train::Domino;
    ///
    /// let oriented = Domino::new(4, 7).oriented(7).unwrap();
    /// assert_eq!((oriented.top(), oriented.bottom()), (7, 4));
    /// assert!(Domino::new(4, 7).oriented(5).is_none());
    /// ```
    pub fn oriented(&self, pips: u32) -> Option<Self> {
        if self.top == pips {
            Some(*self)
        } else if self.bottom == pips {
            Some(self.reversed())
        } else {
            None
        }
    }

    /// Orient this domino against the exposed (bottom) side of `other`.
    ///
    /// A tile never matches itself, so this returns `None` when both tiles
    /// are equal, as well as when the exposed value is absent.
    pub fn oriented_against(&self, other: &Domino) -> Option<Self> {
        if self == other {
            return None;
        }
        self.oriented(other.bottom)
    }

    fn normalized(&self) -> (u32, u32) {
        if self.top <= self.bottom {
            (self.top, self.bottom)
        } else {
            (self.bottom, self.top)
        }
    }
}

impl PartialEq for Domino {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Domino {}

impl Hash for Domino {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl Ord for Domino {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl PartialOrd for Domino {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32)> for Domino {
    fn from((top, bottom): (u32, u32)) -> Self {
        Self::new(top, bottom)
    }
}

impl From<Domino> for (u32, u32) {
    fn from(domino: Domino) -> Self {
        (domino.top, domino.bottom)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top, self.bottom)
    }
}

/// Accepts `"3-9"`, `"3|9"`, `"3,9"`, `"3:9"` and bracketed variants such
/// as `"[3-9]"` or `"(3, 9)"`.
impl FromStr for Domino {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidDomino {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s
            .trim()
            .trim_start_matches(['[', '('])
            .trim_end_matches([']', ')']);
        let Some((top, bottom)) = trimmed.split_once(['-', '|', ',', ':']) else {
            return Err(invalid("expected two pip counts separated by '-'"));
        };

        let parse_pips = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| invalid("pip counts must be non-negative integers"))
        };

        Ok(Domino::new(parse_pips(top)?, parse_pips(bottom)?))
    }
}
