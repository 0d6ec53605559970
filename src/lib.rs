#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod error;
    pub mod matrix;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod render;
}

pub use matrix::error::MatrixError;
pub use matrix::matrix::{Matrix, Scalar};
pub use matrix::render::RenderConfig;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn dense_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    Ok(())
}
