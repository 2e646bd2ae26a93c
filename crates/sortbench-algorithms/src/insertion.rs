//! Insertion sort.
//!
//! The counted shift-and-insert loop is exposed as [`InsertionSort::sort_counted`]
//! so bucket sort can reuse it on each bucket.

use sortbench_core::{AlgorithmKind, Result};

use crate::strategy::{SortStrategy, Strategy};

/// Canonical shift-and-insert sort.
///
/// Counts one operation per outer iteration plus one per shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl InsertionSort {
    /// Sorts `data` in place and returns the operation count.
    ///
    /// Infallible primitive behind [`SortStrategy::sort`].
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_algorithms::InsertionSort;
    ///
    /// let mut data = vec![3, 1, 2];
    /// // two outer iterations, shifts: 1 (for 1) + 1 (for 2)
    /// assert_eq!(InsertionSort.sort_counted(&mut data), 4);
    /// assert_eq!(data, vec![1, 2, 3]);
    /// ```
    pub fn sort_counted<T: Ord>(&self, data: &mut [T]) -> u64 {
        let mut count = 0;

        for index in 1..data.len() {
            count += 1;
            let mut current = index;
            while current > 0 && data[current - 1] > data[current] {
                data.swap(current - 1, current);
                current -= 1;
                count += 1;
            }
        }

        count
    }
}

impl Strategy for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }
}

impl<T: Ord> SortStrategy<T> for InsertionSort {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        Ok(self.sort_counted(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_input_counts_every_shift() {
        let mut data = vec![4, 3, 2, 1];
        let count = InsertionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4]);
        // 3 outer + 1 + 2 + 3 shifts
        assert_eq!(count, 9);
    }

    #[test]
    fn test_sorted_input_only_outer() {
        let mut data = vec![1, 2, 3, 4];
        assert_eq!(InsertionSort.sort(&mut data).unwrap(), 3);
    }

    #[test]
    fn test_equal_elements_do_not_shift() {
        let mut data = vec![5, 5, 5];
        assert_eq!(InsertionSort.sort_counted(&mut data), 2);
    }

    #[test]
    fn test_empty() {
        let mut data: Vec<u32> = vec![];
        assert_eq!(InsertionSort.sort_counted(&mut data), 0);
    }
}
