//! Observer adapters for train searches
//!
//! Observers allow progress reporting and logging without coupling the
//! search loop to a particular output.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::engine::SearchStats;
use crate::{Error, Result, ports::SearchObserver, train::SearchState};

/// Logs search milestones through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    log_every: u64,
}

impl TracingObserver {
    /// Create an observer that logs a heartbeat every 100 000 expansions.
    pub fn new() -> Self {
        Self { log_every: 100_000 }
    }

    /// Log a heartbeat every `expansions` expansions instead.
    pub fn with_interval(expansions: u64) -> Self {
        Self {
            log_every: expansions.max(1),
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for TracingObserver {
    fn on_search_start(&mut self, pool_size: usize) -> Result<()> {
        info!(pool_size, "searching for the best train");
        Ok(())
    }

    fn on_expand(&mut self, expanded: u64, frontier_len: usize) -> Result<()> {
        if expanded.is_multiple_of(self.log_every) {
            debug!(expanded, frontier_len, "search progress");
        }
        Ok(())
    }

    fn on_improvement(&mut self, best: &SearchState) -> Result<()> {
        debug!(
            value = best.value(),
            train_size = best.partial().train_size(),
            remaining_size = best.partial().remaining_size(),
            "improved train"
        );
        Ok(())
    }

    fn on_search_end(&mut self, stats: &SearchStats) -> Result<()> {
        info!(
            expanded = stats.expanded,
            generated = stats.generated,
            peak_frontier = stats.peak_frontier,
            elapsed_ms = u64::try_from(stats.elapsed.as_millis()).unwrap_or(u64::MAX),
            "search finished"
        );
        Ok(())
    }
}

/// Spinner showing expansions, frontier size and the best train so far.
pub struct ProgressObserver {
    spinner: ProgressBar,
    best_value: f64,
    best_size: usize,
}

impl ProgressObserver {
    /// Create a new progress observer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProgressBarTemplate`](crate::Error::ProgressBarTemplate)
    /// if the spinner template is rejected.
    pub fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?,
        );
        Ok(Self {
            spinner,
            best_value: 0.0,
            best_size: 0,
        })
    }
}

impl SearchObserver for ProgressObserver {
    fn on_search_start(&mut self, pool_size: usize) -> Result<()> {
        self.spinner
            .enable_steady_tick(Duration::from_millis(120));
        self.spinner
            .set_message(format!("searching {pool_size} dominoes"));
        Ok(())
    }

    fn on_expand(&mut self, expanded: u64, frontier_len: usize) -> Result<()> {
        if expanded.is_multiple_of(4_096) {
            self.spinner.set_message(format!(
                "expanded {expanded}, frontier {frontier_len}, best {} ({} tiles)",
                self.best_value, self.best_size
            ));
        }
        Ok(())
    }

    fn on_improvement(&mut self, best: &SearchState) -> Result<()> {
        self.best_value = best.value();
        self.best_size = best.partial().train_size();
        Ok(())
    }

    fn on_search_end(&mut self, stats: &SearchStats) -> Result<()> {
        self.spinner.finish_and_clear();
        debug!(expanded = stats.expanded, "progress spinner closed");
        Ok(())
    }
}

/// One line of an improvement trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementRecord {
    /// Expansions made when the improvement was found
    pub expanded: u64,
    pub value: f64,
    pub fitness: f64,
    pub train_size: usize,
    pub train_value: u64,
}

/// Writes every improvement as a JSON line, flushing when the search ends.
pub struct JsonlObserver<W: Write = BufWriter<File>> {
    writer: W,
    expanded: u64,
    written: usize,
}

impl JsonlObserver {
    /// Create a trace file at `path`, truncating any existing file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create trace {}", path.display()),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            expanded: 0,
            written: 0,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SearchObserver for JsonlObserver<W> {
    fn on_expand(&mut self, expanded: u64, _frontier_len: usize) -> Result<()> {
        self.expanded = expanded;
        Ok(())
    }

    fn on_improvement(&mut self, best: &SearchState) -> Result<()> {
        let record = ImprovementRecord {
            expanded: self.expanded,
            value: best.value(),
            fitness: best.fitness(),
            train_size: best.partial().train_size(),
            train_value: best.partial().train_value(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(self.writer)?;
        self.written += 1;
        Ok(())
    }

    fn on_search_end(&mut self, _stats: &SearchStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Fans every event out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn SearchObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<O: SearchObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SearchObserver for CompositeObserver {
    fn on_search_start(&mut self, pool_size: usize) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_search_start(pool_size)?;
        }
        Ok(())
    }

    fn on_expand(&mut self, expanded: u64, frontier_len: usize) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_expand(expanded, frontier_len)?;
        }
        Ok(())
    }

    fn on_improvement(&mut self, best: &SearchState) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_improvement(best)?;
        }
        Ok(())
    }

    fn on_search_end(&mut self, stats: &SearchStats) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_search_end(stats)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{SearchConfig, TrainSearch};

    #[derive(Clone, Default)]
    struct Counter(Rc<RefCell<(u64, u64)>>);

    impl SearchObserver for Counter {
        fn on_expand(&mut self, _expanded: u64, _frontier_len: usize) -> Result<()> {
            self.0.borrow_mut().0 += 1;
            Ok(())
        }

        fn on_search_end(&mut self, _stats: &SearchStats) -> Result<()> {
            self.0.borrow_mut().1 += 1;
            Ok(())
        }
    }

    #[test]
    fn composite_forwards_to_every_observer() {
        let first = Counter::default();
        let second = Counter::default();
        let mut composite = CompositeObserver::new();
        composite.push(first.clone());
        composite.push(second.clone());
        composite.push(TracingObserver::with_interval(1));
        assert_eq!(composite.len(), 3);

        let search = TrainSearch::new(&SearchConfig::demo()).unwrap();
        let outcome = search.run_with_observer(&mut composite).unwrap();

        for counter in [first, second] {
            let (expansions, ends) = *counter.0.borrow();
            assert_eq!(expansions, outcome.stats.expanded);
            assert_eq!(ends, 1);
        }
    }

    #[test]
    fn progress_observer_builds_and_finishes() {
        let mut progress = ProgressObserver::new().unwrap();
        let search = TrainSearch::new(&SearchConfig::new(3, vec![])).unwrap();
        let outcome = search.run_with_observer(&mut progress).unwrap();
        assert!(outcome.is_optimal());
        assert!(progress.spinner.is_finished());
    }

    #[test]
    fn jsonl_records_each_improvement() {
        let search = TrainSearch::new(&SearchConfig::demo()).unwrap();
        let mut trace = JsonlObserver::new(Vec::new());
        let outcome = search.run_with_observer(&mut trace).unwrap();

        assert_eq!(trace.written() as u64, outcome.stats.improvements);
        let bytes = trace.into_inner();
        let records: Vec<ImprovementRecord> = String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert!(records.windows(2).all(|w| w[0].fitness < w[1].fitness));
        assert!(records.windows(2).all(|w| w[0].expanded < w[1].expanded));
        let last = records.last().unwrap();
        assert_eq!(last.train_value, outcome.best.partial().train_value());
        assert_eq!(last.fitness, outcome.best.fitness());
    }

    struct UnflushableSink;

    impl Write for UnflushableSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn jsonl_write_failure_fails_the_search() {
        let search = TrainSearch::new(&SearchConfig::demo()).unwrap();
        let mut trace = JsonlObserver::new(UnflushableSink);
        let err = search.run_with_observer(&mut trace).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
