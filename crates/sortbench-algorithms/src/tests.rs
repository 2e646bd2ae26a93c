//! Properties shared by every strategy.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use proptest::prelude::*;
use sortbench_core::{AlgorithmKind, Book};

use super::*;

fn counts<T: Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn test_sorts_to_permutation(data in prop::collection::vec(1_i64..1000, 0..64)) {
        for kind in AlgorithmKind::ALL {
            let mut sorted = data.clone();
            kind.sort(&mut sorted).unwrap();
            prop_assert!(is_sorted(&sorted), "{} left {:?}", kind, sorted);
            prop_assert_eq!(counts(&sorted), counts(&data), "{} changed the multiset", kind);
        }
    }

    #[test]
    fn test_sorting_sorted_input_is_identity(data in prop::collection::vec(1_i64..1000, 0..64)) {
        for kind in AlgorithmKind::ALL {
            let mut once = data.clone();
            kind.sort(&mut once).unwrap();
            let mut twice = once.clone();
            kind.sort(&mut twice).unwrap();
            prop_assert_eq!(&twice, &once, "{}", kind);
        }
    }

    #[test]
    fn test_matches_std_sort(data in prop::collection::vec(1_u32..50, 0..40)) {
        let mut expected = data.clone();
        expected.sort();
        for kind in AlgorithmKind::ALL {
            let mut actual = data.clone();
            kind.sort(&mut actual).unwrap();
            prop_assert_eq!(&actual, &expected, "{}", kind);
        }
    }
}

#[test]
fn test_trivial_lengths_for_every_strategy() {
    for kind in AlgorithmKind::ALL {
        let mut empty: Vec<i64> = vec![];
        assert_eq!(kind.sort(&mut empty).unwrap(), 0, "{}", kind);
        assert!(empty.is_empty());

        let mut single = vec![5_i64];
        kind.sort(&mut single).unwrap();
        assert_eq!(single, vec![5], "{}", kind);
    }
}

#[test]
fn test_comparison_sorts_order_books_by_title() {
    let date = NaiveDate::from_ymd_opt(2020, 2, 26).unwrap();
    let shelf = vec![
        Book::new("1", "Siedem sióstr", "Lucinda Riley", date),
        Book::new("2", "król", "Szczepan Twardoch", date),
        Book::new("3", "Gdzie śpiewają raki", "Delia Owens", date),
        Book::new("4", "Opowieść podręcznej", "Margaret Atwood", date),
    ];

    for kind in [
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
        AlgorithmKind::Selection,
    ] {
        let mut books = shelf.clone();
        kind.sort(&mut books).unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Gdzie śpiewają raki", "król", "Opowieść podręcznej", "Siedem sióstr"],
            "{}",
            kind
        );
    }
}

#[test]
fn test_bucket_sort_orders_books_within_length_buckets() {
    let date = NaiveDate::from_ymd_opt(2019, 11, 13).unwrap();
    let mut books = vec![
        Book::new("1", "Siedem sióstr", "Lucinda Riley", date),
        Book::new("2", "Król", "Szczepan Twardoch", date),
        Book::new("3", "Gdzie śpiewają raki", "Delia Owens", date),
    ];

    BucketSort::by_key().sort(&mut books).unwrap();

    // 13 and 19 share the last bucket, where title order wins over length
    let lengths: Vec<usize> = books.iter().map(|b| b.title.chars().count()).collect();
    assert_eq!(lengths, vec![4, 19, 13]);
}
