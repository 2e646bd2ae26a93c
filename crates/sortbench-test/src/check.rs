//! Output checks for sorted sequences.

/// Returns true if `items` is non-decreasing.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if `a` and `b` hold the same multiset of elements.
///
/// Only needs `Ord`, so it works for elements that are not `Hash`.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[3, 1, 2], &[1, 2, 3]));
        assert!(is_permutation::<i32>(&[], &[]));
        assert!(!is_permutation(&[1, 1, 2], &[1, 2, 2]));
        assert!(!is_permutation(&[1], &[1, 1]));
    }
}
