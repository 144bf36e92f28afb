use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use gf2elim::{GaussElim, InvalidInput};
use std::cmp::Ordering;

pub(crate) fn invalid_input(e: InvalidInput) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Gaussian elimination over GF(2), deciding whether a list of 0/1 vectors is independent
#[pyclass(name = "GaussElim")]
#[derive(Clone)]
pub struct PyGaussElim {
    pub(crate) inner: GaussElim,
}

#[pymethods]
impl PyGaussElim {
    /// Builds the coefficient matrix whose columns are the vectors in `vec_list`
    #[new]
    pub fn new(vec_list: Vec<Vec<i64>>) -> PyResult<Self> {
        GaussElim::from_vectors(&vec_list)
            .map(|inner| PyGaussElim { inner })
            .map_err(invalid_input)
    }

    /// Number of rows, i.e. the dimension of the vectors
    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.matrix().rows()
    }

    /// Number of columns, i.e. the number of vectors
    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.matrix().cols()
    }

    /// Runs the elimination, returning True if the vectors are linearly independent
    pub fn elim(&mut self) -> bool {
        self.inner.elim().is_independent()
    }

    /// Sorts the rows in descending lexicographic order
    pub fn sort_row(&mut self) {
        self.inner.sort_rows();
    }

    /// Compares rows i1 and i2, returning -1, 0 or 1
    pub fn compare_row(&self, i1: usize, i2: usize) -> PyResult<i32> {
        let rows = self.inner.matrix().rows();
        if i1 >= rows || i2 >= rows {
            return Err(PyIndexError::new_err("Row index out of bounds"));
        }
        Ok(match self.inner.compare_rows(i1, i2) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    /// The current matrix, one row per line
    pub fn display(&self) -> String {
        self.inner.to_string()
    }

    /// Returns a copy of the elimination state
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "GaussElim(rows={}, cols={})",
            self.inner.matrix().rows(),
            self.inner.matrix().cols()
        )
    }
}
