use thiserror::Error;

/// Error types for `Vector` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VectorError {
    /// Index or range end is outside the live elements of the vector
    #[error("Out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index (or range end) that was requested
        index: usize,
        /// Current length of the vector
        length: usize,
    },
}

impl VectorError {
    pub(crate) fn out_of_range(index: usize, length: usize) -> Self {
        VectorError::OutOfRange { index, length }
    }
}
