//! Before/after views of a single sort, for eyeballing a strategy's output.

use serde::Serialize;
use sortbench_algorithms::SortStrategy;
use sortbench_config::RunConfig;
use sortbench_core::{AlgorithmKind, Book};
use tracing::debug;

use crate::error::BenchmarkError;
use crate::generator::RandomArrayGenerator;

/// An integer array as one `value` column of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueColumn {
    pub value: Vec<String>,
}

impl ValueColumn {
    fn from_values(values: &[i64]) -> Self {
        Self {
            value: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// One random array of `max_size` elements, before and after sorting.
///
/// Both columns come from the same draw, so `after` is always a sorted
/// permutation of `before`.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{RandomArrayGenerator, SortPreview};
/// use sortbench_config::RunConfig;
/// use sortbench_core::AlgorithmKind;
///
/// let config = RunConfig::new().with_bounds(1, 100).with_max_size(8);
/// let mut generator = RandomArrayGenerator::with_seed(4);
///
/// let preview = SortPreview::generate(AlgorithmKind::Insertion, &config, &mut generator).unwrap();
/// assert_eq!(preview.before.value.len(), 8);
/// assert_eq!(preview.after.value.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortPreview {
    pub algorithm: AlgorithmKind,
    pub before: ValueColumn,
    pub after: ValueColumn,
    pub operation_count: u64,
}

impl SortPreview {
    /// Draws and sorts one array with the configured bounds and size.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] if `config` fails validation, or
    /// the sort's own error.
    pub fn generate(
        kind: AlgorithmKind,
        config: &RunConfig,
        generator: &mut RandomArrayGenerator,
    ) -> Result<Self, BenchmarkError> {
        config.validate()?;

        let mut values = generator.generate(config.max_size, config.lower_bound, config.upper_bound);
        let before = ValueColumn::from_values(&values);
        let operation_count = kind.sort(&mut values)?;
        debug!(
            event = "preview",
            algorithm = %kind,
            size = values.len() as u64,
            operations = operation_count,
        );

        Ok(Self {
            algorithm: kind,
            before,
            after: ValueColumn::from_values(&values),
            operation_count,
        })
    }
}

/// Books as parallel string columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookColumns {
    pub signature: Vec<String>,
    pub title: Vec<String>,
    pub author: Vec<String>,
    /// `YYYY-MM-DD`.
    pub publish_date: Vec<String>,
}

impl BookColumns {
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            signature: books.iter().map(|b| b.signature.clone()).collect(),
            title: books.iter().map(|b| b.title.clone()).collect(),
            author: books.iter().map(|b| b.author.clone()).collect(),
            publish_date: books
                .iter()
                .map(|b| b.publish_date.format("%Y-%m-%d").to_string())
                .collect(),
        }
    }
}

/// A shelf of books before and after sorting.
///
/// Bucket sort projects books onto their title length, so its output is
/// ordered by title only within each length bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPreview {
    pub algorithm: AlgorithmKind,
    pub before: BookColumns,
    pub after: BookColumns,
    pub operation_count: u64,
}

impl BookPreview {
    /// Sorts `books` with `kind`.
    pub fn generate(kind: AlgorithmKind, mut books: Vec<Book>) -> Result<Self, BenchmarkError> {
        let before = BookColumns::from_books(&books);
        let operation_count = kind.sort(&mut books)?;

        Ok(Self {
            algorithm: kind,
            before,
            after: BookColumns::from_books(&books),
            operation_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::sample_shelf;

    fn parse(column: &ValueColumn) -> Vec<i64> {
        column.value.iter().map(|v| v.parse().unwrap()).collect()
    }

    #[test]
    fn test_after_is_sorted_permutation_of_before() {
        let config = RunConfig::new().with_bounds(1, 50).with_max_size(40);
        let mut generator = RandomArrayGenerator::with_seed(8);

        for kind in AlgorithmKind::ALL {
            let preview = SortPreview::generate(kind, &config, &mut generator).unwrap();
            let mut expected = parse(&preview.before);
            expected.sort();
            assert_eq!(parse(&preview.after), expected, "{}", kind);
            assert_eq!(preview.algorithm, kind);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RunConfig::new().with_bounds(10, 10);
        let mut generator = RandomArrayGenerator::with_seed(8);
        let err = SortPreview::generate(AlgorithmKind::Bubble, &config, &mut generator).unwrap_err();
        assert!(matches!(err, BenchmarkError::Config(_)));
    }

    #[test]
    fn test_value_column_json() {
        let column = ValueColumn::from_values(&[3, 1]);
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            serde_json::json!({"value": ["3", "1"]})
        );
    }

    #[test]
    fn test_book_preview_by_title() {
        let preview = BookPreview::generate(AlgorithmKind::Quick, sample_shelf()).unwrap();
        assert_eq!(preview.before.title[0], "Król");
        assert_eq!(
            preview.after.title,
            vec![
                "27 śmierci Toby’ego Obeda",
                "Gdzie śpiewają raki",
                "Król",
                "Opowieść podręcznej",
                "Siedem sióstr",
            ]
        );
        assert_eq!(preview.after.publish_date[0], "2019-05-22");
    }

    #[test]
    fn test_book_columns_stay_aligned() {
        let preview = BookPreview::generate(AlgorithmKind::Bucket, sample_shelf()).unwrap();
        let shelf = sample_shelf();
        for (i, title) in preview.after.title.iter().enumerate() {
            let book = shelf.iter().find(|b| &b.title == title).unwrap();
            assert_eq!(preview.after.signature[i], book.signature);
            assert_eq!(preview.after.author[i], book.author);
        }
    }
}
