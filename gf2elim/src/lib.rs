//! `gf2elim` decides whether a set of boolean vectors is linearly independent over the 2-element
//! finite field, by Gaussian elimination with XOR row operations. Some features include:
//! - building the coefficient matrix from `bool` or 0/1 integer vectors, with eager validation
//! - deterministic row ordering before elimination, so intermediate states are reproducible
//! - forward elimination and a bottom-up verdict pass on bit-packed rows
//! - XOR functions of input variables and a basis check over them
//!
//! The main data structures provided by this crate are:
//! - [`CoefficientMatrix`]: a dense bit matrix whose columns are the input vectors
//! - [`GaussElim`]: the elimination state of one independence check, exposing each stage
//!
//! ```
//! use gf2elim::{GaussElim, Verdict};
//!
//! let mut ge = GaussElim::from_vectors(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
//! assert_eq!(ge.elim(), Verdict::Independent);
//! ```

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::bool_assert_comparison,
    clippy::must_use_candidate,
    clippy::bool_to_int_with_if
)]
pub mod bits;
pub mod elim;
pub mod error;
pub mod matrix;
pub mod xorfunc;

pub use bits::{BitBlock, BitRow, BLOCKSIZE};
pub use elim::{is_independent, vectors_independent, ElimOptions, GaussElim, RowOrder, Verdict};
pub use error::InvalidInput;
pub use matrix::{BitCell, CoefficientMatrix};
pub use xorfunc::{is_basis, XorFunc};
