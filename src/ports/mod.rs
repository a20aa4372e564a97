//! Ports (trait boundaries) for external dependencies.
//!
//! The search engine only knows these traits; progress bars, log sinks and
//! other collectors are adapters that implement them.

pub mod observer;

pub use observer::{NullObserver, SearchObserver};
