//! Book record, the non-numeric input domain.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::element::BucketKey;

/// A library record ordered case-insensitively by title.
///
/// Equality and ordering ignore every field except the title, so two
/// editions with the same title compare equal.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sortbench_core::{Book, BucketKey};
///
/// let date = NaiveDate::from_ymd_opt(2020, 10, 28).unwrap();
/// let a = Book::new("9788308070956", "alpha", "A. Author", date);
/// let b = Book::new("9788380324398", "Beta", "B. Author", date);
///
/// assert!(a < b);
/// assert_eq!(b.bucket_key(), 4.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub signature: String,
    pub title: String,
    pub author: String,
    pub publish_date: NaiveDate,
}

impl Book {
    pub fn new(
        signature: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            signature: signature.into(),
            title: title.into(),
            author: author.into(),
            publish_date,
        }
    }

    fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Returns the built-in shelf of five books used by book previews.
///
/// The shelf is in acquisition order, which is neither title order nor
/// title-length order.
pub fn sample_shelf() -> Vec<Book> {
    vec![
        Book::new("9788308070956", "Król", "Szczepan Twardoch", date(2020, 10, 28)),
        Book::new(
            "9788380324398",
            "Opowieść podręcznej",
            "Margaret Atwood",
            date(2020, 2, 26),
        ),
        Book::new(
            "9788365970343",
            "27 śmierci Toby’ego Obeda",
            "Joanna Gierak-Onoszko",
            date(2019, 5, 22),
        ),
        Book::new(
            "9788381392686",
            "Gdzie śpiewają raki",
            "Delia Owens",
            date(2019, 10, 30),
        ),
        Book::new("9788381257947", "Siedem sióstr", "Lucinda Riley", date(2019, 11, 13)),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title_key() == other.title_key()
    }
}

impl Eq for Book {}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title_key().cmp(&other.title_key())
    }
}

/// Books bucket by title length in characters.
impl BucketKey for Book {
    fn bucket_key(&self) -> f64 {
        self.title.chars().count() as f64
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
