//! Background sweeps with streamed progress.

use std::thread::{self, JoinHandle};

use sortbench_config::RunConfig;
use sortbench_core::AlgorithmKind;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::warn;

use crate::aggregator::TrialAggregator;
use crate::error::BenchmarkError;
use crate::result::{BenchmarkTable, TrialRecord};

/// A sweep running on its own thread.
///
/// The job streams one [`TrialRecord`] per completed size, in size order,
/// and hands over the finished table on [`join`](Self::join). Once started
/// a sweep always runs to completion or to its first error; there is no
/// cancellation.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::BenchmarkJob;
/// use sortbench_config::RunConfig;
///
/// let config = RunConfig::new().with_max_size(5).with_repetitions(2);
/// let mut job = BenchmarkJob::spawn(config).unwrap();
///
/// let mut sizes = Vec::new();
/// while let Some(record) = job.blocking_next_record() {
///     sizes.push(record.size);
/// }
///
/// let table = job.join().unwrap();
/// assert_eq!(sizes, vec![1, 2, 3, 4]);
/// assert_eq!(table.sizes(), sizes.as_slice());
/// ```
pub struct BenchmarkJob {
    algorithm: AlgorithmKind,
    records: Option<UnboundedReceiver<TrialRecord>>,
    handle: JoinHandle<Result<BenchmarkTable, BenchmarkError>>,
}

impl BenchmarkJob {
    /// Validates `config` and starts the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] for an invalid configuration, or
    /// [`BenchmarkError::Io`] if the worker thread cannot be started.
    pub fn spawn(config: RunConfig) -> Result<Self, BenchmarkError> {
        config.validate()?;

        let algorithm = config.algorithm;
        let (sender, receiver) = mpsc::unbounded_channel();

        let handle = thread::Builder::new()
            .name(format!("sortbench-{}", algorithm))
            .spawn(move || {
                let mut receiver_dropped = false;
                let mut aggregator = TrialAggregator::from_config(&config);
                aggregator.run_with_progress(&config.algorithm, &config, |record| {
                    if sender.send(*record).is_err() && !receiver_dropped {
                        receiver_dropped = true;
                        warn!(
                            event = "progress_dropped",
                            size = record.size as u64,
                            "Progress receiver dropped, sweep continues"
                        );
                    }
                })
            })?;

        Ok(Self {
            algorithm,
            records: Some(receiver),
            handle,
        })
    }

    /// Returns the algorithm being benchmarked.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Returns the next completed record if one is ready.
    pub fn try_next_record(&mut self) -> Option<TrialRecord> {
        self.records.as_mut()?.try_recv().ok()
    }

    /// Waits for the next completed record.
    ///
    /// Returns `None` once the sweep has ended and every record has been
    /// received. Must not be called from inside an async runtime; take the
    /// receiver with [`take_receiver`](Self::take_receiver) there instead.
    pub fn blocking_next_record(&mut self) -> Option<TrialRecord> {
        self.records.as_mut()?.blocking_recv()
    }

    /// Takes ownership of the progress stream.
    ///
    /// Returns `None` if it was already taken.
    pub fn take_receiver(&mut self) -> Option<UnboundedReceiver<TrialRecord>> {
        self.records.take()
    }

    /// Returns true once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the sweep and returns its table.
    ///
    /// # Errors
    ///
    /// Returns the sweep's own error, or [`BenchmarkError::WorkerPanicked`]
    /// if the worker thread panicked.
    pub fn join(self) -> Result<BenchmarkTable, BenchmarkError> {
        self.handle
            .join()
            .map_err(|_| BenchmarkError::WorkerPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig::new()
            .with_algorithm(AlgorithmKind::Bubble)
            .with_max_size(6)
            .with_repetitions(3)
            .with_random_seed(21)
    }

    #[test]
    fn test_streams_every_size_in_order() {
        let mut job = BenchmarkJob::spawn(config()).unwrap();
        assert_eq!(job.algorithm(), AlgorithmKind::Bubble);

        let mut streamed = Vec::new();
        while let Some(record) = job.blocking_next_record() {
            streamed.push(record);
        }
        assert!(job.try_next_record().is_none());

        let table = job.join().unwrap();
        assert_eq!(streamed, table.records().collect::<Vec<_>>());
        assert_eq!(table.sizes(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seeded_job_matches_inline_run() {
        let mut job = BenchmarkJob::spawn(config()).unwrap();
        drop(job.take_receiver());
        let background = job.join().unwrap();

        let inline = crate::run_benchmark(&config()).unwrap();
        assert_eq!(background.sizes(), inline.sizes());
        assert_eq!(background.operation_counts(), inline.operation_counts());
        assert_eq!(background.estimated_costs(), inline.estimated_costs());
    }

    #[test]
    fn test_rejects_invalid_config_before_starting() {
        let err = BenchmarkJob::spawn(config().with_repetitions(0)).err().unwrap();
        assert!(matches!(err, BenchmarkError::Config(_)));
    }

    #[test]
    fn test_taken_receiver_is_gone() {
        let mut job = BenchmarkJob::spawn(config()).unwrap();
        assert!(job.take_receiver().is_some());
        assert!(job.take_receiver().is_none());
        assert!(job.blocking_next_record().is_none());
        job.join().unwrap();
    }
}
