//! Linear functions of input variables, and checking whether a set of them forms a basis.

use crate::elim::vectors_independent;
use crate::error::InvalidInput;
use std::fmt;
use tracing::debug;

/// The XOR of a list of input variables, given by their indices
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct XorFunc {
    var_list: Vec<usize>,
}

impl XorFunc {
    pub fn new(var_list: Vec<usize>) -> Self {
        XorFunc { var_list }
    }

    /// The variable indices, as given
    #[inline]
    pub fn var_list(&self) -> &[usize] {
        &self.var_list
    }

    /// Coefficient vector of this function over `var_num` variables.
    ///
    /// Bit `v` is set when `v` occurs an odd number of times in the list, since `x ^ x = 0`.
    pub fn bitvect(&self, var_num: usize) -> Result<Vec<bool>, InvalidInput> {
        let mut bits = vec![false; var_num];
        for &var in &self.var_list {
            let b = bits
                .get_mut(var)
                .ok_or(InvalidInput::VariableOutOfRange { var, var_num })?;
            *b = !*b;
        }
        Ok(bits)
    }
}

impl From<Vec<usize>> for XorFunc {
    fn from(var_list: Vec<usize>) -> Self {
        XorFunc::new(var_list)
    }
}

impl fmt::Display for XorFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.var_list.is_empty() {
            return write!(f, "0");
        }
        for (k, var) in self.var_list.iter().enumerate() {
            if k > 0 {
                write!(f, " ^ ")?;
            }
            write!(f, "x{}", var)?;
        }
        Ok(())
    }
}

/// Checks whether `funcs` are linearly independent as functions of `var_num` variables.
///
/// More functions than variables can never be independent, so that case returns `false` without
/// running the elimination.
pub fn is_basis(funcs: &[XorFunc], var_num: usize) -> Result<bool, InvalidInput> {
    if funcs.is_empty() {
        return Err(InvalidInput::NoVectors);
    }
    if var_num == 0 {
        return Err(InvalidInput::ZeroDimension);
    }

    let vectors = funcs
        .iter()
        .map(|func| func.bitvect(var_num))
        .collect::<Result<Vec<_>, _>>()?;

    if funcs.len() > var_num {
        debug!(funcs = funcs.len(), var_num, "more functions than variables");
        return Ok(false);
    }

    vectors_independent(&vectors)
}
