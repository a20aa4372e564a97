//! The train search engine
//!
//! [`TrainSearch`] enumerates every train reachable from the seed and keeps
//! the best one under the configured [`Objective`](crate::Objective).

pub mod config;
pub mod engine;
pub mod frontier;
pub mod observers;

pub use config::{SearchBudget, SearchConfig};
pub use engine::{Completion, SearchOutcome, SearchStats, TrainSearch};
pub use frontier::FrontierOrder;
pub use observers::{
    CompositeObserver, ImprovementRecord, JsonlObserver, ProgressObserver, TracingObserver,
};
