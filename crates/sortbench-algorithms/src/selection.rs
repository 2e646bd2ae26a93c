//! Selection sort.

use sortbench_core::{AlgorithmKind, Result};

use crate::strategy::{SortStrategy, Strategy};

/// Scans the unsorted remainder for its minimum and swaps it into place.
///
/// Counts one operation per outer iteration plus one per inner scan step.
/// The scan covers the whole remainder, last element included, so the
/// count for `n` elements is `(n - 1) + n * (n - 1) / 2` regardless of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Strategy for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }
}

impl<T: Ord> SortStrategy<T> for SelectionSort {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        let len = data.len();
        let mut count = 0;

        for index in 0..len.saturating_sub(1) {
            count += 1;
            let mut min_index = index;
            for j in index + 1..len {
                count += 1;
                if data[j] < data[min_index] {
                    min_index = j;
                }
            }
            data.swap(index, min_index);
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements() {
        let mut data = vec![9, 4];
        assert_eq!(SelectionSort.sort(&mut data).unwrap(), 2);
        assert_eq!(data, vec![4, 9]);
    }

    #[test]
    fn test_last_element_is_scanned() {
        // minimum sits in the final slot
        let mut data = vec![3, 2, 1];
        SelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_count_is_input_independent() {
        for n in 0..12_u64 {
            let mut ascending: Vec<u64> = (0..n).collect();
            let mut descending: Vec<u64> = (0..n).rev().collect();
            let expected = n.saturating_sub(1) + n * n.saturating_sub(1) / 2;
            assert_eq!(SelectionSort.sort(&mut ascending).unwrap(), expected);
            assert_eq!(SelectionSort.sort(&mut descending).unwrap(), expected);
        }
    }
}
