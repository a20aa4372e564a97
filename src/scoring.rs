//! Pluggable scoring strategies for the train search
//!
//! A [`Distance`] measures what one placement gains; a [`Heuristic`]
//! estimates what the unplaced tiles could still add. [`Objective`] bundles
//! the two matching pairs the engine ships with, and any closure of the
//! right shape can stand in for either half.

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Error, train::PartialTrainState};

/// Score gained when moving from `start` to `end`.
pub trait Distance {
    fn between(&self, start: &PartialTrainState, end: &PartialTrainState) -> f64;
}

/// Optimistic estimate of the score still reachable from `state`.
pub trait Heuristic {
    fn estimate(&self, state: &PartialTrainState) -> f64;
}

impl<F> Distance for F
where
    F: Fn(&PartialTrainState, &PartialTrainState) -> f64,
{
    fn between(&self, start: &PartialTrainState, end: &PartialTrainState) -> f64 {
        self(start, end)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&PartialTrainState) -> f64,
{
    fn estimate(&self, state: &PartialTrainState) -> f64 {
        self(state)
    }
}

/// What the search maximizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    /// Total pips placed in the train
    #[default]
    #[value(alias = "value")]
    ByValue,
    /// Number of dominoes placed in the train
    #[value(alias = "size")]
    BySize,
}

impl Objective {
    /// The quantity this objective maximizes, measured on the placed train.
    pub fn measure(&self, state: &PartialTrainState) -> f64 {
        match self {
            Objective::ByValue => state.train_value() as f64,
            Objective::BySize => state.train_size() as f64,
        }
    }

    /// The same quantity summed over everything still unplaced.
    pub fn residual(&self, state: &PartialTrainState) -> f64 {
        match self {
            Objective::ByValue => state.remaining_value() as f64,
            Objective::BySize => state.remaining_size() as f64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::ByValue => "by-value",
            Objective::BySize => "by-size",
        }
    }
}

impl Distance for Objective {
    fn between(&self, start: &PartialTrainState, end: &PartialTrainState) -> f64 {
        self.measure(end) - self.measure(start)
    }
}

impl Heuristic for Objective {
    fn estimate(&self, state: &PartialTrainState) -> f64 {
        self.residual(state)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "by-value" | "value" => Ok(Objective::ByValue),
            "by-size" | "size" => Ok(Objective::BySize),
            other => Err(Error::InvalidConfiguration {
                message: format!("unknown objective '{other}', expected by-value or by-size"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Domino, train::Pool};

    fn states() -> (PartialTrainState, PartialTrainState) {
        let pool = Pool::new([Domino::new(7, 3), Domino::new(3, 3), Domino::new(2, 9)]).unwrap();
        let start = PartialTrainState::initial(&pool);
        let state = crate::train::SearchState::initial(&pool, &Objective::ByValue);
        let end = state
            .successors(7)
            .into_iter()
            .next()
            .expect("7-3 matches the seed")
            .partial()
            .clone();
        (start, end)
    }

    #[test]
    fn by_value_scores_pips() {
        let (start, end) = states();
        assert_eq!(Objective::ByValue.between(&start, &end), 10.0);
        assert_eq!(Objective::ByValue.estimate(&start), 27.0);
        assert_eq!(Objective::ByValue.estimate(&end), 17.0);
    }

    #[test]
    fn by_size_scores_tiles() {
        let (start, end) = states();
        assert_eq!(Objective::BySize.between(&start, &end), 1.0);
        assert_eq!(Objective::BySize.estimate(&start), 3.0);
        assert_eq!(Objective::BySize.estimate(&end), 2.0);
    }

    #[test]
    fn closures_act_as_strategies() {
        let (start, end) = states();
        let flat = |_: &PartialTrainState, _: &PartialTrainState| 1.0;
        let none = |_: &PartialTrainState| 0.0;
        assert_eq!(flat.between(&start, &end), 1.0);
        assert_eq!(none.estimate(&end), 0.0);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("by-value".parse::<Objective>().unwrap(), Objective::ByValue);
        assert_eq!("Size".parse::<Objective>().unwrap(), Objective::BySize);
        assert!("pips".parse::<Objective>().is_err());
        assert_eq!(
            serde_json::to_string(&Objective::BySize).unwrap(),
            "\"by-size\""
        );
    }
}
