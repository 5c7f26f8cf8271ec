//! Error types for optional input validation.

use thiserror::Error;

/// Why a weighted input list fails validation.
///
/// Rendering itself never returns these: degenerate input degrades to
/// degenerate geometry instead of faulting. Validation exists for callers
/// who prefer a loud failure over silently skewed output.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// A weight is negative, NaN, or infinite.
    #[error("item {index} has invalid weight {weight}")]
    InvalidWeight {
        /// Position of the offending item in the input list.
        index: usize,
        /// The weight as supplied.
        weight: f64,
    },

    /// The weight total does not match the area of the render bounds.
    #[error("weights sum to {total} but the bounds have area {expected}")]
    WeightSum {
        /// Sum of all supplied weights.
        total: f64,
        /// Area of the bounds rectangle the weights should cover.
        expected: f64,
    },
}
