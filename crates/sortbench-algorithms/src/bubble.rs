//! Bubble sort.

use sortbench_core::{AlgorithmKind, Result};

use crate::strategy::{SortStrategy, Strategy};

/// Repeated adjacent compare-and-swap passes until a pass swaps nothing.
///
/// Counts one operation per comparison, swapped or not. An already sorted
/// input costs a single pass of `n - 1` comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Strategy for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }
}

impl<T: Ord> SortStrategy<T> for BubbleSort {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        let mut count = 0;
        let mut has_swapped = true;

        while has_swapped {
            has_swapped = false;
            for i in 0..data.len().saturating_sub(1) {
                count += 1;
                if data[i] > data[i + 1] {
                    data.swap(i, i + 1);
                    has_swapped = true;
                }
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_counts_passes() {
        let mut data = vec![3, 2, 1];
        let count = BubbleSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        // [2,1,3] -> [1,2,3] -> clean pass
        assert_eq!(count, 6);
    }

    #[test]
    fn test_sorted_input_single_pass() {
        let mut data = vec![1, 2, 3, 4, 5];
        assert_eq!(BubbleSort.sort(&mut data).unwrap(), 4);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        assert_eq!(BubbleSort.sort(&mut empty).unwrap(), 0);

        let mut single = vec![9];
        assert_eq!(BubbleSort.sort(&mut single).unwrap(), 0);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_estimated_cost() {
        assert_eq!(BubbleSort.estimated_cost(12), 144.0);
        assert_eq!(BubbleSort.name(), "Bubble sort");
    }
}
