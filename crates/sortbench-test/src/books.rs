//! Book constructors.

use chrono::NaiveDate;
use sortbench_core::Book;

/// Creates a book with only a meaningful title.
pub fn book(title: &str) -> Book {
    let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    Book::new(format!("sig-{}", title), title, "Test Author", date)
}

/// Creates one book per title, in the given order.
pub fn books(titles: &[&str]) -> Vec<Book> {
    titles.iter().map(|t| book(t)).collect()
}
