//! Timing instrumentation around sort invocations.
//!
//! Timing stays outside the strategies: a strategy only counts, and
//! [`measure`] wraps any counting routine with a monotonic clock.

use std::time::{Duration, Instant};

use sortbench_algorithms::SortStrategy;
use sortbench_core::Result;

/// Elapsed wall-clock time and operation count of one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Time spent inside the routine.
    pub elapsed: Duration,
    /// Count returned by the routine.
    pub operation_count: u64,
}

impl Measurement {
    /// Creates a measurement.
    pub fn new(elapsed: Duration, operation_count: u64) -> Self {
        Self {
            elapsed,
            operation_count,
        }
    }

    /// Returns the elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Returns the elapsed time in microseconds.
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed_secs() * 1_000_000.0
    }
}

/// Times `routine` with a monotonic clock.
///
/// Whatever the routine mutates stays mutated; its count is passed
/// through unchanged and its error, if any, is propagated.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::measure;
///
/// let mut data = vec![3, 1, 2];
/// let measurement = measure(|| {
///     data.sort();
///     Ok(7)
/// })
/// .unwrap();
///
/// assert_eq!(measurement.operation_count, 7);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn measure<F>(routine: F) -> Result<Measurement>
where
    F: FnOnce() -> Result<u64>,
{
    let start = Instant::now();
    let operation_count = routine()?;
    let elapsed = start.elapsed();
    Ok(Measurement::new(elapsed, operation_count))
}

/// Times one `strategy.sort(data)` call.
pub fn measure_sort<T, S>(strategy: &S, data: &mut [T]) -> Result<Measurement>
where
    S: SortStrategy<T> + ?Sized,
{
    measure(|| strategy.sort(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_algorithms::BubbleSort;
    use sortbench_core::SortBenchError;

    #[test]
    fn test_measure_passes_count_through() {
        let m = measure(|| Ok(42)).unwrap();
        assert_eq!(m.operation_count, 42);
    }

    #[test]
    fn test_measure_sees_elapsed_time() {
        let m = measure(|| {
            std::thread::sleep(Duration::from_millis(2));
            Ok(0)
        })
        .unwrap();
        assert!(m.elapsed >= Duration::from_millis(2));
        assert!(m.elapsed_micros() >= 2_000.0);
    }

    #[test]
    fn test_measure_propagates_error() {
        let err = measure(|| Err(SortBenchError::DegenerateInput("x".to_string()))).unwrap_err();
        assert!(matches!(err, SortBenchError::DegenerateInput(_)));
    }

    #[test]
    fn test_measure_sort_keeps_mutation() {
        let mut data = vec![2, 1];
        let m = measure_sort(&BubbleSort, &mut data).unwrap();
        assert_eq!(data, vec![1, 2]);
        assert_eq!(m.operation_count, 2);
    }

    #[test]
    fn test_unit_conversions() {
        let m = Measurement::new(Duration::from_micros(1_500), 3);
        assert!((m.elapsed_secs() - 0.0015).abs() < 1e-12);
        assert!((m.elapsed_micros() - 1_500.0).abs() < 1e-6);
    }
}
