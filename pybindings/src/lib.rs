// There seems to be some issues with the pyo3 bindings generation on methods returning
// a `PyResult<T>`.
#![allow(clippy::useless_conversion)]

pub mod gausselim;
pub mod xorfunc;

use crate::gausselim::PyGaussElim;
use crate::xorfunc::PyXorFunc;
use pyo3::prelude::*;

#[pymodule]
fn gf2elim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGaussElim>()?;
    m.add_class::<PyXorFunc>()?;
    m.add_function(wrap_pyfunction!(xorfunc::is_basis, m)?)?;
    Ok(())
}
