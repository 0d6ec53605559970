use crate::matrix::error::MatrixError;
use crate::matrix::matrix::{Matrix, Scalar};
use pyo3::exceptions::{PyIndexError, PyMemoryError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::BadRow { .. } | MatrixError::BadCol { .. } => {
                PyIndexError::new_err(error.to_string())
            }
            MatrixError::AllocationFailure { .. } => PyMemoryError::new_err(error.to_string()),
            MatrixError::DimensionMismatch { .. }
            | MatrixError::ShapeMismatch { .. }
            | MatrixError::EmptyShape { .. } => PyValueError::new_err(error.to_string()),
        }
    }
}

/// Python view of [`Matrix`], exported as `dense_matrix.Matrix`.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix,
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: usize, cols: usize) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::create(rows, cols)?,
        })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::identity(n)?,
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<Scalar>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::from_rows(lines)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<Scalar>> {
        self.inner.to_rows()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn get_cell(&self, row: usize, col: usize) -> PyResult<Scalar> {
        Ok(self.inner.get_cell(row, col)?)
    }

    pub fn set_cell(&mut self, value: Scalar, row: usize, col: usize) -> PyResult<()> {
        Ok(self.inner.set_cell(value, row, col)?)
    }

    pub fn get_row(&self, row: usize) -> PyResult<Vec<Scalar>> {
        Ok(self.inner.row(row)?.to_vec())
    }

    pub fn set_row(&mut self, values: Vec<Scalar>, row: usize) -> PyResult<()> {
        Ok(self.inner.set_row(&values, row)?)
    }

    pub fn init(&mut self, values: Vec<Scalar>) -> PyResult<()> {
        Ok(self.inner.init(&values)?)
    }

    pub fn scale(&mut self, k: Scalar) {
        self.inner.scalar_multiply(k)
    }

    pub fn duplicate(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.duplicate()?,
        })
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.transpose()?,
        })
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner.equals(&other.inner)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
