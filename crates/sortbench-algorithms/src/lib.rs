//! Instrumented sorting strategies for sortbench.
//!
//! Every strategy sorts a mutable slice in place and returns an operation
//! count, an algorithm-specific proxy for work done:
//!
//! | Strategy | Counted operations | Cost model |
//! |----------|--------------------|------------|
//! | [`BubbleSort`] | comparisons | `n^2` |
//! | [`InsertionSort`] | outer iterations + shifts | `n^2` |
//! | [`BucketSort`] | allocations + distributions + per-bucket insertion sort + buckets processed | `3n` |
//! | [`QuickSort`] | partition loop iterations + pointer advances | `n*log2(n) + n` |
//! | [`SelectionSort`] | outer iterations + scan steps | `n^2` |
//!
//! Strategies are plain unit structs (or, for bucket sort, a struct holding a
//! projection function) and are monomorphized over the element type.
//! [`AlgorithmKind`](sortbench_core::AlgorithmKind) also implements
//! [`SortStrategy`] and dispatches to the matching strategy, for callers that
//! select the algorithm at runtime.
//!
//! # Example
//!
//! ```
//! use sortbench_algorithms::{SelectionSort, SortStrategy, Strategy};
//!
//! let mut data = vec![42, 7, 19];
//! let operations = SelectionSort.sort(&mut data).unwrap();
//!
//! assert_eq!(data, vec![7, 19, 42]);
//! assert_eq!(operations, 5);
//! assert_eq!(SelectionSort.estimated_cost(3), 9.0);
//! ```

mod bubble;
mod bucket;
mod complexity;
mod insertion;
mod kind;
mod quick;
mod selection;
mod strategy;

#[cfg(test)]
mod tests;

pub use bubble::BubbleSort;
pub use bucket::BucketSort;
pub use complexity::{CostModel, BUCKET_LINEAR_FACTOR};
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use strategy::{SortStrategy, Strategy};
