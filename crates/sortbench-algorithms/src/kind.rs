//! Runtime dispatch from an [`AlgorithmKind`] to its strategy.

use sortbench_core::{AlgorithmKind, BucketKey, Result, SortElement};

use crate::bubble::BubbleSort;
use crate::bucket::BucketSort;
use crate::insertion::InsertionSort;
use crate::quick::QuickSort;
use crate::selection::SelectionSort;
use crate::strategy::{SortStrategy, Strategy};

impl Strategy for AlgorithmKind {
    fn kind(&self) -> AlgorithmKind {
        *self
    }
}

/// Sorting through a kind selects the concrete strategy per call.
///
/// Bucket sort projects through [`BucketKey`].
impl<T: SortElement + BucketKey> SortStrategy<T> for AlgorithmKind {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        match self {
            AlgorithmKind::Bubble => BubbleSort.sort(data),
            AlgorithmKind::Insertion => InsertionSort.sort(data),
            AlgorithmKind::Bucket => BucketSort::by_key().sort(data),
            AlgorithmKind::Quick => QuickSort.sort(data),
            AlgorithmKind::Selection => SelectionSort.sort(data),
        }
    }
}
