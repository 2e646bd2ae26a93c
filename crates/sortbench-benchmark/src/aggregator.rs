//! Trial aggregation across a size sweep.
//!
//! Logging levels:
//! - **INFO**: Sweep start/end
//! - **DEBUG**: One event per completed size
//! - **TRACE**: Individual trials

use std::time::Instant;

use sortbench_algorithms::{SortStrategy, Strategy};
use sortbench_config::RunConfig;
use tracing::{debug, info, trace};

use crate::error::BenchmarkError;
use crate::generator::RandomArrayGenerator;
use crate::result::{BenchmarkTable, TrialRecord};
use crate::timing::{measure_sort, Measurement};

/// Runs a strategy over sizes `1..max_size`, `repetitions` trials per size,
/// and reduces each size's samples to one [`TrialRecord`].
///
/// Every trial sorts its own freshly generated array; nothing is shared
/// between trials except the generator's random source. A failing trial
/// aborts the whole sweep.
///
/// # Example
///
/// ```
/// use sortbench_algorithms::SelectionSort;
/// use sortbench_benchmark::{RandomArrayGenerator, TrialAggregator};
/// use sortbench_config::RunConfig;
///
/// let config = RunConfig::new()
///     .with_bounds(1, 1000)
///     .with_max_size(10)
///     .with_repetitions(5);
///
/// let mut aggregator = TrialAggregator::new(RandomArrayGenerator::with_seed(1));
/// let table = aggregator.run(&SelectionSort, &config).unwrap();
///
/// assert_eq!(table.len(), 9);
/// assert_eq!(table.estimated_costs()[2], 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct TrialAggregator {
    generator: RandomArrayGenerator,
}

impl TrialAggregator {
    /// Creates an aggregator drawing inputs from `generator`.
    pub fn new(generator: RandomArrayGenerator) -> Self {
        Self { generator }
    }

    /// Creates an aggregator seeded from the configuration, if it has a seed.
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(RandomArrayGenerator::from_config(config))
    }

    /// Runs the sweep and returns the table.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] if `config` fails validation, or
    /// the first error raised by a trial.
    pub fn run<S>(
        &mut self,
        strategy: &S,
        config: &RunConfig,
    ) -> Result<BenchmarkTable, BenchmarkError>
    where
        S: SortStrategy<i64> + ?Sized,
    {
        self.run_with_progress(strategy, config, |_| {})
    }

    /// Runs the sweep, calling `on_record` as each size completes.
    pub fn run_with_progress<S, F>(
        &mut self,
        strategy: &S,
        config: &RunConfig,
        mut on_record: F,
    ) -> Result<BenchmarkTable, BenchmarkError>
    where
        S: SortStrategy<i64> + ?Sized,
        F: FnMut(&TrialRecord),
    {
        config.validate()?;

        let kind = strategy.kind();
        let start = Instant::now();
        info!(
            event = "sweep_start",
            algorithm = %kind,
            max_size = config.max_size as u64,
            repetitions = config.repetitions as u64,
            lower_bound = config.lower_bound,
            upper_bound = config.upper_bound,
        );

        let mut table = BenchmarkTable::new(kind);
        let mut samples = Vec::with_capacity(config.repetitions);

        for size in 1..config.max_size {
            samples.clear();
            for repetition in 0..config.repetitions {
                let mut array = self
                    .generator
                    .generate(size, config.lower_bound, config.upper_bound);
                let measurement = measure_sort(strategy, &mut array)?;
                trace!(
                    event = "trial",
                    size = size as u64,
                    repetition = repetition as u64,
                    elapsed_ns = measurement.elapsed.as_nanos() as u64,
                    operations = measurement.operation_count,
                );
                samples.push(measurement);
            }

            let (elapsed_secs, operation_count) = reduce_samples(&samples);
            let record = TrialRecord {
                size,
                measured_time_micros: elapsed_secs * 1_000_000.0,
                estimated_cost: strategy.estimated_cost(size),
                operation_count,
            };
            debug!(
                event = "size_done",
                size = size as u64,
                time_us = record.measured_time_micros,
                operations = record.operation_count,
            );

            on_record(&record);
            table.push(record);
        }

        info!(
            event = "sweep_end",
            algorithm = %kind,
            sizes = table.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(table)
    }
}

/// Reduces samples to `(elapsed_secs, operation_count)`.
///
/// A single sample is returned as-is; otherwise both values are arithmetic
/// means. An empty sample set reduces to zeros.
pub(crate) fn reduce_samples(samples: &[Measurement]) -> (f64, f64) {
    match samples {
        [] => (0.0, 0.0),
        [only] => (only.elapsed_secs(), only.operation_count as f64),
        _ => {
            let n = samples.len() as f64;
            let secs: f64 = samples.iter().map(Measurement::elapsed_secs).sum();
            let ops: f64 = samples.iter().map(|m| m.operation_count as f64).sum();
            (secs / n, ops / n)
        }
    }
}

/// Runs the configured algorithm with a generator seeded from the config.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::run_benchmark;
/// use sortbench_config::RunConfig;
/// use sortbench_core::AlgorithmKind;
///
/// let config = RunConfig::new()
///     .with_algorithm(AlgorithmKind::Quick)
///     .with_max_size(6)
///     .with_repetitions(2)
///     .with_random_seed(3);
///
/// let table = run_benchmark(&config).unwrap();
/// assert_eq!(table.algorithm(), AlgorithmKind::Quick);
/// assert_eq!(table.sizes(), &[1, 2, 3, 4, 5]);
/// ```
pub fn run_benchmark(config: &RunConfig) -> Result<BenchmarkTable, BenchmarkError> {
    TrialAggregator::from_config(config).run(&config.algorithm, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reduce_single_sample_is_exact() {
        let sample = Measurement::new(Duration::from_nanos(1_234_567), 17);
        let (secs, ops) = reduce_samples(&[sample]);
        assert_eq!(secs, sample.elapsed_secs());
        assert_eq!(ops, 17.0);
    }

    #[test]
    fn test_reduce_means() {
        let samples = [
            Measurement::new(Duration::from_micros(10), 4),
            Measurement::new(Duration::from_micros(30), 7),
        ];
        let (secs, ops) = reduce_samples(&samples);
        assert!((secs - 0.000_02).abs() < 1e-12);
        assert_eq!(ops, 5.5);
    }

    #[test]
    fn test_reduce_empty() {
        assert_eq!(reduce_samples(&[]), (0.0, 0.0));
    }
}
