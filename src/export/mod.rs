//! Export functionality for search results
//!
//! This module turns a finished search into a serializable report.
//! Currently supports JSON export.

mod report;

pub use report::{StatsSummary, TrainReport};
