//! Strategy traits shared by every sorting algorithm.

use std::fmt::Debug;

use sortbench_core::{AlgorithmKind, Result};

use crate::complexity::CostModel;

/// Identity and analytical cost of a sorting strategy.
///
/// Independent of the element type, so a strategy can be described
/// (listed, plotted against its estimate) without sorting anything.
pub trait Strategy: Debug {
    /// Returns which algorithm this is.
    fn kind(&self) -> AlgorithmKind;

    /// Returns the human-readable name.
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Returns the closed-form cost model used as a comparison baseline.
    fn cost_model(&self) -> CostModel {
        CostModel::for_kind(self.kind())
    }

    /// Estimated cost for an input of `n` elements.
    ///
    /// Pure function of `n`.
    fn estimated_cost(&self, n: usize) -> f64 {
        self.cost_model().estimate(n)
    }
}

/// A strategy that sorts `T` in place and counts its elementary operations.
///
/// # Type Parameters
///
/// * `T` - The element type
pub trait SortStrategy<T>: Strategy {
    /// Sorts `data` ascending by the element's native ordering.
    ///
    /// Returns the number of elementary operations performed. What counts
    /// as an operation is algorithm-specific.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy cannot process the input; `data` is
    /// left unmodified in that case.
    fn sort(&self, data: &mut [T]) -> Result<u64>;
}
