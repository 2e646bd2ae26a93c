//! A strategy whose operation count is scripted by the test.

use std::cell::Cell;

use sortbench_algorithms::{SortStrategy, Strategy};
use sortbench_core::{AlgorithmKind, Result, SortBenchError};

/// Sorts with the standard library and reports a scripted count.
///
/// The script receives the input length and the zero-based call index, so
/// tests know exactly which count every trial produced.
///
/// # Example
///
/// ```
/// use sortbench_algorithms::SortStrategy;
/// use sortbench_test::ScriptedStrategy;
///
/// let strategy = ScriptedStrategy::new(|len, call| len as u64 * 10 + call);
/// let mut data = vec![2, 1];
///
/// assert_eq!(strategy.sort(&mut data).unwrap(), 20);
/// assert_eq!(strategy.sort(&mut data).unwrap(), 21);
/// assert_eq!(data, vec![1, 2]);
/// assert_eq!(strategy.calls(), 2);
/// ```
#[derive(Debug)]
pub struct ScriptedStrategy {
    kind: AlgorithmKind,
    script: fn(usize, u64) -> u64,
    fail_at: Option<usize>,
    calls: Cell<u64>,
}

impl ScriptedStrategy {
    /// Creates a strategy reporting as selection sort.
    pub fn new(script: fn(usize, u64) -> u64) -> Self {
        Self {
            kind: AlgorithmKind::Selection,
            script,
            fail_at: None,
            calls: Cell::new(0),
        }
    }

    /// Reports as `kind` instead.
    pub fn with_kind(mut self, kind: AlgorithmKind) -> Self {
        self.kind = kind;
        self
    }

    /// Fails with a degenerate-input error on inputs of length `len`.
    pub fn failing_at(mut self, len: usize) -> Self {
        self.fail_at = Some(len);
        self
    }

    /// Returns how many times `sort` was called.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl Strategy for ScriptedStrategy {
    fn kind(&self) -> AlgorithmKind {
        self.kind
    }
}

impl<T: Ord> SortStrategy<T> for ScriptedStrategy {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        let call = self.calls.get();
        self.calls.set(call + 1);

        if self.fail_at == Some(data.len()) {
            return Err(SortBenchError::DegenerateInput(format!(
                "scripted failure at length {}",
                data.len()
            )));
        }

        data.sort();
        Ok((self.script)(data.len(), call))
    }
}
