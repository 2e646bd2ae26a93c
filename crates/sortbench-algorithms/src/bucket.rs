//! Bucket sort.

use std::fmt;

use sortbench_core::{AlgorithmKind, BucketKey, Result, SortBenchError};

use crate::insertion::InsertionSort;
use crate::strategy::{SortStrategy, Strategy};

/// Distributes elements into `n` buckets by a numeric projection, sorts each
/// bucket with [`InsertionSort`], and concatenates the buckets.
///
/// The bucket of an element is `floor(projection / scale)` with
/// `scale = max_projection / n`; the element holding the maximum lands on
/// index `n` and is clamped into the last bucket.
///
/// Counts one operation per bucket allocated, one per element distributed,
/// the insertion sort count of every bucket, and one per bucket processed.
///
/// The output is fully ordered only when the projection is monotone in the
/// element ordering (true for integers, not for [`Book`](sortbench_core::Book)
/// titles bucketed by length).
///
/// # Example
///
/// ```
/// use sortbench_algorithms::{BucketSort, SortStrategy};
///
/// let mut data = vec![5_i64, 3, 8, 1];
/// BucketSort::by_key().sort(&mut data).unwrap();
/// assert_eq!(data, vec![1, 3, 5, 8]);
///
/// let mut words = vec!["ccc", "a", "bb"];
/// BucketSort::with_projection(|w: &&str| w.len() as f64)
///     .sort(&mut words)
///     .unwrap();
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub struct BucketSort<T> {
    projection: fn(&T) -> f64,
    insertion: InsertionSort,
}

impl<T> BucketSort<T> {
    /// Creates a bucket sort using a custom projection.
    pub fn with_projection(projection: fn(&T) -> f64) -> Self {
        Self {
            projection,
            insertion: InsertionSort,
        }
    }
}

impl<T: BucketKey> BucketSort<T> {
    /// Creates a bucket sort projecting through [`BucketKey`].
    pub fn by_key() -> Self {
        Self::with_projection(T::bucket_key)
    }
}

impl<T: BucketKey> Default for BucketSort<T> {
    fn default() -> Self {
        Self::by_key()
    }
}

impl<T> Clone for BucketSort<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BucketSort<T> {}

impl<T> fmt::Debug for BucketSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketSort").finish_non_exhaustive()
    }
}

impl<T> Strategy for BucketSort<T> {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bucket
    }
}

impl<T: Ord + Clone> SortStrategy<T> for BucketSort<T> {
    fn sort(&self, data: &mut [T]) -> Result<u64> {
        let len = data.len();
        if len == 0 {
            return Ok(0);
        }

        let keys: Vec<f64> = data.iter().map(self.projection).collect();
        if let Some(bad) = keys.iter().find(|k| !k.is_finite() || **k < 0.0) {
            return Err(SortBenchError::DegenerateInput(format!(
                "bucket projection must be a finite non-negative number, got {}",
                bad
            )));
        }

        let max_key = keys.iter().copied().fold(0.0_f64, f64::max);
        let scale = max_key / len as f64;
        if scale <= 0.0 || !scale.is_finite() {
            return Err(SortBenchError::DegenerateInput(format!(
                "bucket scaling factor is {} (max projection {} over {} elements)",
                scale, max_key, len
            )));
        }

        let mut count = 0;

        let mut buckets: Vec<Vec<T>> = Vec::with_capacity(len);
        for _ in 0..len {
            buckets.push(Vec::new());
            count += 1;
        }

        for (item, key) in data.iter().zip(&keys) {
            let index = ((key / scale) as usize).min(len - 1);
            buckets[index].push(item.clone());
            count += 1;
        }

        for bucket in &mut buckets {
            count += self.insertion.sort_counted(bucket) + 1;
        }

        for (slot, item) in data.iter_mut().zip(buckets.into_iter().flatten()) {
            *slot = item;
        }

        Ok(count)
    }
}
