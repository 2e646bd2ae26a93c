//! Capabilities required of sortable elements.

use std::fmt::Debug;

/// Marker for anything the strategies can sort.
///
/// Strategies compare with the element's native [`Ord`] and move elements
/// between positions (and, for bucket sort, between buckets), which needs
/// [`Clone`]. Implemented automatically for every qualifying type.
pub trait SortElement: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> SortElement for T {}

/// Numeric projection used to pick a bucket for an element.
///
/// Integers project to their own value. Records supply whatever numeric
/// view of themselves makes sense; see [`Book`](crate::Book).
///
/// # Example
///
/// ```
/// use sortbench_core::BucketKey;
///
/// assert_eq!(42_i64.bucket_key(), 42.0);
/// assert_eq!(7_u32.bucket_key(), 7.0);
/// ```
pub trait BucketKey {
    /// Returns the projection of this element.
    fn bucket_key(&self) -> f64;
}

macro_rules! impl_bucket_key_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BucketKey for $ty {
                #[inline]
                fn bucket_key(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_bucket_key_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
