use thiserror::Error;

/// Every way a matrix operation can fail.
///
/// Row errors take precedence over column errors: `BadCol` is only reported once
/// the row index passed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} out of range, expected 1..={rows}")]
    BadRow { row: usize, rows: usize },

    #[error("column {col} out of range, expected 1..={cols}")]
    BadCol { col: usize, cols: usize },

    #[error("could not allocate storage for a {rows}x{cols} matrix")]
    AllocationFailure { rows: usize, cols: usize },

    #[error(
        "dimensions not compatible: {}x{} times {}x{}",
        lhs.0, lhs.1, rhs.0, rhs.1
    )]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("a matrix needs at least one row and one column, got {rows}x{cols}")]
    EmptyShape { rows: usize, cols: usize },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatrixError::BadRow { row: 3, rows: 2 }.to_string(),
            "row 3 out of range, expected 1..=2"
        );
        assert_eq!(
            MatrixError::BadCol { col: 5, cols: 2 }.to_string(),
            "column 5 out of range, expected 1..=2"
        );
        assert_eq!(
            MatrixError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (2, 2)
            }
            .to_string(),
            "dimensions not compatible: 2x3 times 2x2"
        );
        assert_eq!(
            MatrixError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "expected 4 values, got 3"
        );
    }
}
