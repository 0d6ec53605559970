use crate::matrix::error::MatrixError;
use itertools::iproduct;
use log::{debug, trace};
use num_traits::{One, Zero};
use std::ops;

/// The single element type stored by [`Matrix`].
pub type Scalar = f32;

/// A dense, row-major matrix of [`Scalar`] with fixed dimensions.
///
/// Public row and column indices are 1-based. Both dimensions are at least 1 for
/// every matrix that can be constructed.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Scalar>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix. Square matrices start as the identity, all
    /// others start zeroed.
    pub fn create(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let mut cells = Self::allocate(rows, cols)?;
        cells.extend(iproduct!(0..rows, 0..cols).map(|(r, c)| {
            if rows == cols && r == c {
                Scalar::one()
            } else {
                Scalar::zero()
            }
        }));

        debug!("created {}x{} matrix", rows, cols);
        Ok(Matrix { rows, cols, cells })
    }

    pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
        Self::create(n, n)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let mut cells = Self::allocate(rows, cols)?;
        cells.resize(rows * cols, Scalar::zero());
        Ok(Matrix { rows, cols, cells })
    }

    /// Takes ownership of a row-major buffer of exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Scalar>) -> Result<Matrix, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationFailure { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Matrix {
            rows,
            cols,
            cells: data,
        })
    }

    /// Builds a matrix from a list of equally long rows.
    pub fn from_rows(lines: Vec<Vec<Scalar>>) -> Result<Matrix, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if let Some(ragged) = lines.iter().find(|l| l.len() != cols) {
            return Err(MatrixError::ShapeMismatch {
                expected: cols,
                actual: ragged.len(),
            });
        }

        let mut cells = Self::allocate(rows, cols)?;
        cells.extend(lines.into_iter().flatten());
        Ok(Matrix { rows, cols, cells })
    }

    pub fn to_rows(&self) -> Vec<Vec<Scalar>> {
        self.cells.chunks(self.cols).map(|line| line.into()).collect()
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn duplicate(&self) -> Result<Matrix, MatrixError> {
        let mut cells = Self::allocate(self.rows, self.cols)?;
        cells.extend_from_slice(&self.cells);
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Overwrites every cell, row-major, from `values`.
    ///
    /// The matrix is left untouched when `values` does not hold exactly
    /// `rows * cols` elements.
    pub fn init(&mut self, values: &[Scalar]) -> Result<(), MatrixError> {
        if values.len() != self.cells.len() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.cells.len(),
                actual: values.len(),
            });
        }
        self.cells.copy_from_slice(values);
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.cells
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Scalar, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(self.cells[offset])
    }

    pub fn set_cell(&mut self, value: Scalar, row: usize, col: usize) -> Result<(), MatrixError> {
        let offset = self.offset(row, col)?;
        self.cells[offset] = value;
        Ok(())
    }

    /// Borrows row `row` (1-based).
    pub fn row(&self, row: usize) -> Result<&[Scalar], MatrixError> {
        let r = self.row_index(row)?;
        Ok(&self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Copies row `row` (1-based) into `buf`, which must hold exactly `cols` values.
    pub fn get_row(&self, row: usize, buf: &mut [Scalar]) -> Result<(), MatrixError> {
        let line = self.row(row)?;
        if buf.len() != line.len() {
            return Err(MatrixError::ShapeMismatch {
                expected: line.len(),
                actual: buf.len(),
            });
        }
        buf.copy_from_slice(line);
        Ok(())
    }

    pub fn set_row(&mut self, values: &[Scalar], row: usize) -> Result<(), MatrixError> {
        let r = self.row_index(row)?;
        if values.len() != self.cols {
            return Err(MatrixError::ShapeMismatch {
                expected: self.cols,
                actual: values.len(),
            });
        }
        self.cells[r * self.cols..(r + 1) * self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Exact comparison: same shape and every cell equal under `==`, no tolerance.
    pub fn equals(&self, other: &Matrix) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.cells.iter().zip(other.cells.iter()).all(|(a, b)| a == b)
    }

    pub fn scalar_multiply(&mut self, k: Scalar) {
        self.cells.iter_mut().for_each(|x| *x *= k);
    }

    /// Matrix product `self * rhs`.
    ///
    /// Each cell is accumulated in `Scalar` precision over the shared dimension,
    /// rows of `self` outermost and columns of `rhs` next, so results are
    /// reproducible bit for bit.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            debug!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            );
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        trace!(
            "multiply {}x{} by {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );

        let mut cells = Self::allocate(self.rows, rhs.cols)?;
        cells.extend(iproduct!(0..self.rows, 0..rhs.cols).map(|(i, j)| {
            (0..self.cols).fold(Scalar::zero(), |acc, k| acc + self.at(i, k) * rhs.at(k, j))
        }));

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells,
        })
    }

    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        trace!("transpose {}x{}", self.rows, self.cols);
        let mut cells = Self::allocate(self.cols, self.rows)?;
        cells.extend(iproduct!(0..self.cols, 0..self.rows).map(|(c, r)| self.at(r, c)));

        Ok(Matrix {
            rows: self.cols,
            cols: self.rows,
            cells,
        })
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> Scalar {
        self.cells[row * self.cols + col]
    }

    fn row_index(&self, row: usize) -> Result<usize, MatrixError> {
        if row < 1 || row > self.rows {
            return Err(MatrixError::BadRow {
                row,
                rows: self.rows,
            });
        }
        Ok(row - 1)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        let r = self.row_index(row)?;
        if col < 1 || col > self.cols {
            return Err(MatrixError::BadCol {
                col,
                cols: self.cols,
            });
        }
        Ok(r * self.cols + (col - 1))
    }

    // Empty vector with room for exactly `rows * cols` cells.
    fn allocate(rows: usize, cols: usize) -> Result<Vec<Scalar>, MatrixError> {
        if rows == 0 || cols == 0 {
            debug!("refusing to build a {}x{} matrix", rows, cols);
            return Err(MatrixError::EmptyShape { rows, cols });
        }

        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationFailure { rows, cols })?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|err| {
            debug!("allocation of {}x{} matrix failed: {}", rows, cols, err);
            MatrixError::AllocationFailure { rows, cols }
        })?;
        Ok(cells)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.equals(other)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.multiply(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
