//! Analytical cost models.
//!
//! Each strategy reports a closed-form estimate of its cost for `n`
//! elements next to the measured values. Bucket sort uses `3n` and quick
//! sort uses `n * log2(n) + n`; other published variants of these formulas
//! (plain `n`, base-10 logarithms) are not used.

use std::fmt;

use serde::Serialize;
use sortbench_core::AlgorithmKind;

/// Multiplier applied to `n` in the bucket sort estimate.
pub const BUCKET_LINEAR_FACTOR: f64 = 3.0;

/// Closed-form asymptotic cost of a strategy.
///
/// # Example
///
/// ```
/// use sortbench_algorithms::CostModel;
/// use sortbench_core::AlgorithmKind;
///
/// assert_eq!(CostModel::for_kind(AlgorithmKind::Selection).estimate(9), 81.0);
/// assert_eq!(CostModel::for_kind(AlgorithmKind::Quick).estimate(8), 32.0);
/// assert_eq!(CostModel::for_kind(AlgorithmKind::Bucket).estimate(10), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CostModel {
    /// `n^2`
    Quadratic,

    /// `n * log2(n) + n`
    Linearithmic,

    /// `factor * n`
    Linear { factor: f64 },
}

impl CostModel {
    /// Returns the canonical model for an algorithm.
    pub fn for_kind(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Bubble | AlgorithmKind::Insertion | AlgorithmKind::Selection => {
                CostModel::Quadratic
            }
            AlgorithmKind::Quick => CostModel::Linearithmic,
            AlgorithmKind::Bucket => CostModel::Linear {
                factor: BUCKET_LINEAR_FACTOR,
            },
        }
    }

    /// Evaluates the model at `n`.
    pub fn estimate(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            CostModel::Quadratic => n * n,
            // log2(0) is -inf; an empty input costs nothing
            CostModel::Linearithmic if n == 0.0 => 0.0,
            CostModel::Linearithmic => n * n.log2() + n,
            CostModel::Linear { factor } => factor * n,
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostModel::Quadratic => f.write_str("n^2"),
            CostModel::Linearithmic => f.write_str("n*log2(n) + n"),
            CostModel::Linear { factor } => write!(f, "{}n", factor),
        }
    }
}
