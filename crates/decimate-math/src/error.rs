//! Error handling for vector operations
//!
//! Almost nothing in this crate can fail: degenerate geometry and IEEE special
//! values are defined results, not errors. The variants here cover the two
//! places where a caller can hand in something that has no meaning at all.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A component accessor was given an index outside `[0, len)`.
    #[error("Component index {index} out of range for a {len}-component vector")]
    IndexOutOfRange { index: usize, len: usize },
    /// A numeric format string could not be parsed.
    #[error("Invalid format specifier: {0}")]
    InvalidFormat(String),
}

/// Result alias used throughout the crate.
pub type VectorResult<T> = Result<T, VectorError>;

pub(crate) fn index_out_of_range(index: usize, len: usize) -> VectorError {
    VectorError::IndexOutOfRange { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = index_out_of_range(2, 2);
        assert_eq!(
            format!("{}", error),
            "Component index 2 out of range for a 2-component vector"
        );

        let error = VectorError::InvalidFormat("X9".to_string());
        assert_eq!(format!("{}", error), "Invalid format specifier: X9");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            index_out_of_range(5, 4),
            VectorError::IndexOutOfRange { index: 5, len: 4 }
        );
        assert_ne!(index_out_of_range(5, 4), index_out_of_range(4, 4));
    }
}
