use crate::error::InvalidInput;
use crate::matrix::{BitCell, CoefficientMatrix};
use std::{cmp::Ordering, fmt};
use tracing::{debug, trace};

/// Outcome of an independence check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Some nontrivial XOR-combination of the vectors is zero.
    Dependent,
    /// Only the trivial combination is zero.
    Independent,
}

impl Verdict {
    #[inline]
    pub fn is_independent(self) -> bool {
        self == Verdict::Independent
    }
}

/// How rows are arranged before forward elimination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Stable insertion sort into descending lexicographic order. This fixes the pivot sequence
    /// independently of how the coordinates were presented.
    #[default]
    LexDescending,
    /// Eliminate in the order the coordinates were given. The verdict is the same, only the
    /// intermediate matrix differs.
    AsGiven,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElimOptions {
    pub row_order: RowOrder,
}

/// Gaussian elimination over GF(2) with a zero right-hand side
///
/// Owns the coefficient matrix of one independence check and mutates it in place: the rows are
/// ordered, reduced by XOR row operations, and finally scanned bottom-up to decide whether the
/// homogeneous system has a solution other than all zeros.
#[derive(Clone, Debug)]
pub struct GaussElim {
    matrix: CoefficientMatrix,
    options: ElimOptions,
}

impl GaussElim {
    pub fn new(matrix: CoefficientMatrix) -> Self {
        Self::with_options(matrix, ElimOptions::default())
    }

    pub fn with_options(matrix: CoefficientMatrix, options: ElimOptions) -> Self {
        GaussElim { matrix, options }
    }

    /// Builds the coefficient matrix from `vectors`, see [`CoefficientMatrix::from_vectors`].
    pub fn from_vectors<V, B>(vectors: &[V]) -> Result<Self, InvalidInput>
    where
        V: AsRef<[B]>,
        B: BitCell,
    {
        Ok(Self::new(CoefficientMatrix::from_vectors(vectors)?))
    }

    #[inline]
    pub fn matrix(&self) -> &CoefficientMatrix {
        &self.matrix
    }

    /// Runs row ordering, forward elimination and the verdict pass.
    pub fn elim(&mut self) -> Verdict {
        if self.options.row_order == RowOrder::LexDescending {
            self.sort_rows();
        }
        self.forward_eliminate();
        self.verdict()
    }

    /// Sorts the rows into descending lexicographic order.
    ///
    /// Insertion sort: row `i` goes in front of the first already placed row that is smaller.
    /// Equal rows never move past each other.
    pub fn sort_rows(&mut self) {
        for i in 1..self.matrix.rows() {
            if let Some(i1) = (0..i).find(|&i1| self.compare_rows(i1, i) == Ordering::Less) {
                self.matrix.move_row(i, i1);
            }
        }
    }

    /// See [`CoefficientMatrix::compare_rows`]
    #[inline]
    pub fn compare_rows(&self, i1: usize, i2: usize) -> Ordering {
        self.matrix.compare_rows(i1, i2)
    }

    /// For each nonzero row, clears its pivot column from every row below it.
    ///
    /// Rows are not swapped, so the result is not necessarily in echelon form, but each pivot
    /// column is 0 below the row it was taken from.
    pub fn forward_eliminate(&mut self) {
        let rows = self.matrix.rows();
        for i in 0..rows {
            let Some(pivot) = self.matrix.row(i).first_one() else {
                continue;
            };
            trace!(row = i, pivot, "eliminating pivot");

            for i1 in (i + 1)..rows {
                if self.matrix.bit(i1, pivot) {
                    self.matrix.add_row(i, i1);
                }
            }
        }
    }

    /// Scans the reduced rows bottom-up.
    ///
    /// A row with a single 1 forces that variable to 0, which is propagated by clearing its
    /// column everywhere. A row with two or more 1s left leaves a free choice, hence a nontrivial
    /// solution. So does a column that no row ever forces, e.g. one coming from a zero vector.
    pub fn verdict(&mut self) -> Verdict {
        let mut forced = 0;
        for i in (0..self.matrix.rows()).rev() {
            match self.matrix.row_weight(i) {
                0 => {}
                1 => {
                    if let Some(j) = self.matrix.row(i).last_one() {
                        trace!(row = i, var = j, "variable forced to 0");
                        self.matrix.clear_column(j);
                        forced += 1;
                    }
                }
                c => {
                    debug!(row = i, ones = c, "nontrivial solution, vectors are dependent");
                    return Verdict::Dependent;
                }
            }
        }

        if forced < self.matrix.cols() {
            debug!(forced, cols = self.matrix.cols(), "unconstrained variable, vectors are dependent");
            return Verdict::Dependent;
        }

        debug!("only the trivial solution, vectors are independent");
        Verdict::Independent
    }
}

impl fmt::Display for GaussElim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

/// Decides whether the columns of `matrix` are linearly independent over GF(2).
pub fn is_independent(matrix: CoefficientMatrix) -> bool {
    GaussElim::new(matrix).elim().is_independent()
}

/// Decides whether `vectors` are linearly independent over GF(2).
///
/// ```
/// use gf2elim::vectors_independent;
///
/// assert_eq!(vectors_independent(&[[1, 1, 1], [0, 1, 1], [0, 0, 1]]), Ok(true));
/// assert_eq!(vectors_independent(&[[1, 1, 1], [0, 1, 1], [1, 0, 0]]), Ok(false));
/// ```
pub fn vectors_independent<V, B>(vectors: &[V]) -> Result<bool, InvalidInput>
where
    V: AsRef<[B]>,
    B: BitCell,
{
    Ok(is_independent(CoefficientMatrix::from_vectors(vectors)?))
}
