use pyo3::prelude::*;

use gf2elim::XorFunc;

use crate::gausselim::invalid_input;

/// The XOR of a list of input variables
#[pyclass(name = "XorFunc")]
#[derive(Clone)]
pub struct PyXorFunc {
    pub(crate) inner: XorFunc,
}

#[pymethods]
impl PyXorFunc {
    #[new]
    pub fn new(var_list: Vec<usize>) -> Self {
        PyXorFunc {
            inner: XorFunc::new(var_list),
        }
    }

    #[getter]
    pub fn var_list(&self) -> Vec<usize> {
        self.inner.var_list().to_vec()
    }

    /// Coefficient vector over `var_num` variables, as a list of 0/1 integers
    pub fn bitvect(&self, var_num: usize) -> PyResult<Vec<u8>> {
        let bits = self.inner.bitvect(var_num).map_err(invalid_input)?;
        Ok(bits.into_iter().map(u8::from).collect())
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("XorFunc({:?})", self.inner.var_list())
    }
}

/// Returns True if `funcs` are linearly independent functions of `var_num` variables
#[pyfunction]
pub fn is_basis(funcs: Vec<PyXorFunc>, var_num: usize) -> PyResult<bool> {
    let funcs: Vec<XorFunc> = funcs.into_iter().map(|f| f.inner).collect();
    gf2elim::is_basis(&funcs, var_num).map_err(invalid_input)
}
