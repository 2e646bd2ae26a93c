//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortBenchError;

/// Identifies one of the benchmarked sorting strategies.
///
/// Parses from the kebab-case ids used in configuration files
/// (`"bubble-sort"`, `"quick-sort"`, ...) or their short forms
/// (`"bubble"`, `"quick"`, ...), ignoring case.
///
/// # Example
///
/// ```
/// use sortbench_core::AlgorithmKind;
///
/// let kind: AlgorithmKind = "Quick-Sort".parse().unwrap();
/// assert_eq!(kind, AlgorithmKind::Quick);
/// assert_eq!(kind.id(), "quick-sort");
/// assert_eq!(kind.display_name(), "Quick sort");
///
/// assert!("shell-sort".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AlgorithmKind {
    #[serde(rename = "bubble-sort", alias = "bubble")]
    Bubble,

    #[serde(rename = "insertion-sort", alias = "insertion")]
    Insertion,

    #[default]
    #[serde(rename = "bucket-sort", alias = "bucket")]
    Bucket,

    #[serde(rename = "quick-sort", alias = "quick")]
    Quick,

    #[serde(rename = "selection-sort", alias = "selection")]
    Selection,
}

impl AlgorithmKind {
    /// Every strategy, in menu order.
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bucket,
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
        AlgorithmKind::Selection,
    ];

    /// Returns the configuration id.
    pub fn id(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble-sort",
            AlgorithmKind::Insertion => "insertion-sort",
            AlgorithmKind::Bucket => "bucket-sort",
            AlgorithmKind::Quick => "quick-sort",
            AlgorithmKind::Selection => "selection-sort",
        }
    }

    /// Returns the human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble sort",
            AlgorithmKind::Insertion => "Insertion sort",
            AlgorithmKind::Bucket => "Bucket sort",
            AlgorithmKind::Quick => "Quick sort",
            AlgorithmKind::Selection => "Selection sort",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let short = normalized.strip_suffix("-sort").unwrap_or(&normalized);
        match short {
            "bubble" => Ok(AlgorithmKind::Bubble),
            "insertion" => Ok(AlgorithmKind::Insertion),
            "bucket" => Ok(AlgorithmKind::Bucket),
            "quick" => Ok(AlgorithmKind::Quick),
            "selection" => Ok(AlgorithmKind::Selection),
            _ => Err(SortBenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}
