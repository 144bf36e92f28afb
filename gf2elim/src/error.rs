//! Input validation errors.
//!
//! Every check happens before any elimination work starts. Once a
//! [`CoefficientMatrix`](crate::CoefficientMatrix) exists, the independence verdict cannot fail.

use thiserror::Error;

/// Rejected input to matrix construction or to an XOR function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// No vectors were supplied.
    #[error("at least one vector is required")]
    NoVectors,

    /// The vectors have no coordinates.
    #[error("vectors must have at least one coordinate")]
    ZeroDimension,

    /// A vector's length differs from the length of the first vector.
    #[error("vector {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// An integer entry other than 0 or 1.
    #[error("entry {coordinate} of vector {vector} is neither 0 nor 1")]
    NonBinaryEntry { vector: usize, coordinate: usize },

    /// An XOR function refers to a variable outside the variable space.
    #[error("variable x{var} is out of range for {var_num} variables")]
    VariableOutOfRange { var: usize, var_num: usize },
}
