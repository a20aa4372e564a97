//! Optimal Mexican-train search
//!
//! This crate provides:
//! - Domino tiles with order-independent equality and orientation helpers
//! - Immutable partial trains with structural sharing between successors
//! - Pluggable distance/heuristic scoring (by pip value or by tile count)
//! - An exhaustive best-first engine that returns the optimal train
//! - JSON configuration and reporting, plus the `domino-train` CLI

pub mod cli;
pub mod domino;
pub mod error;
pub mod export;
pub mod ports;
pub mod scoring;
pub mod search;
pub mod train;

pub use domino::Domino;
pub use error::{Error, Result};
pub use export::TrainReport;
pub use scoring::{Distance, Heuristic, Objective};
pub use search::{
    Completion, FrontierOrder, SearchBudget, SearchConfig, SearchOutcome, SearchStats,
    TrainSearch,
};
pub use train::{PartialTrainState, Pool, SearchState, TrainEdge};
