//! Library-level error type. The algorithmic core never errors (see
//! [`crate::distance::UNREACHABLE`] and `Option` returns for that); this type
//! covers malformed *input* only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} has width {actual}, expected {expected}")]
    InconsistentRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
