//! Quick sort.

use sortbench_core::{AlgorithmKind, Result};

use crate::strategy::{SortStrategy, Strategy};

/// Hoare-style quick sort with the first element of each range as pivot.
///
/// Partitioning scans inward from both ends, counting one operation per
/// outer loop iteration and one per pointer advance. There is no pivot
/// randomization, so sorted and reverse-sorted inputs take quadratic time.
/// After each partition the smaller side is sorted recursively and the
/// larger side iteratively, which bounds stack depth without changing
/// the count.
///
/// # Example
///
/// ```
/// use sortbench_algorithms::{QuickSort, SortStrategy};
///
/// let mut data = vec![5, 4, 3, 2, 1];
/// QuickSort.sort(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Strategy for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }
}

impl<T: Ord> SortStrategy<T> for QuickSort {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        Ok(quick_sort(data))
    }
}

fn quick_sort<T: Ord>(mut data: &mut [T]) -> u64 {
    let mut count = 0;

    while data.len() >= 2 {
        let (pivot, partition_count) = partition(data);
        count += partition_count;

        let range = std::mem::take(&mut data);
        let (left, rest) = range.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            count += quick_sort(left);
            data = right;
        } else {
            count += quick_sort(right);
            data = left;
        }
    }

    count
}

/// Partitions around `data[0]`; returns the pivot's final index and the
/// operation count. Requires `data.len() >= 2`.
fn partition<T: Ord>(data: &mut [T]) -> (usize, u64) {
    let mut low = 1;
    let mut high = data.len() - 1;
    let mut count = 0;

    loop {
        count += 1;

        while low <= high && data[high] >= data[0] {
            high -= 1;
            count += 1;
        }

        while low <= high && data[low] <= data[0] {
            low += 1;
            count += 1;
        }

        if low <= high {
            data.swap(low, high);
        } else {
            break;
        }
    }

    data.swap(0, high);
    (high, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot() {
        let mut data = vec![4, 7, 1, 9, 3];
        let (pivot, count) = partition(&mut data);
        assert_eq!(data[pivot], 4);
        assert!(data[..pivot].iter().all(|&x| x <= 4));
        assert!(data[pivot + 1..].iter().all(|&x| x >= 4));
        assert!(count >= 1);
    }

    #[test]
    fn test_partition_two_elements() {
        let mut data = vec![2, 1];
        // outer 1, high stays (1 < 2), low advances once
        assert_eq!(partition(&mut data), (1, 2));
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_descending_input() {
        let mut data = vec![5, 4, 3, 2, 1];
        let count = QuickSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert!(count > 0);
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![3, 1, 3, 3, 2, 1, 3];
        QuickSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: Vec<i64> = vec![];
        assert_eq!(QuickSort.sort(&mut empty).unwrap(), 0);
        let mut single = vec![1];
        assert_eq!(QuickSort.sort(&mut single).unwrap(), 0);
    }

    #[test]
    fn test_sorted_input_worst_case() {
        let mut data: Vec<u32> = (0..5_000).collect();
        QuickSort.sort(&mut data).unwrap();
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_estimated_cost() {
        assert_eq!(QuickSort.estimated_cost(4), 12.0);
    }
}
