use crate::bits::*;
use crate::error::InvalidInput;
use rand::Rng;
use std::{cmp::Ordering, fmt, ops::Index};
use tracing::debug;

/// An entry of an input vector.
///
/// `bool` maps directly; integer types are accepted when they hold 0 or 1.
pub trait BitCell: Copy {
    /// Returns `None` for anything that is not a GF(2) element.
    fn to_bit(self) -> Option<bool>;
}

impl BitCell for bool {
    #[inline]
    fn to_bit(self) -> Option<bool> {
        Some(self)
    }
}

macro_rules! int_bit_cell {
    ($($t:ty),*) => {
        $(
            impl BitCell for $t {
                #[inline]
                fn to_bit(self) -> Option<bool> {
                    match self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }
            }
        )*
    };
}

int_bit_cell!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// The `n × m` coefficient matrix of an independence check over GF(2)
///
/// Column `j` holds input vector `j`, row `i` holds coordinate `i` of every vector. Rows are
/// stored contiguously in row-major order, each as `col_blocks` many [`BitBlock`]s. If the number
/// of columns is not a multiple of `BLOCKSIZE`, the last block of each row is padded with 0s, and
/// every row operation keeps that padding at 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientMatrix {
    /// the number of rows, i.e. the dimension of the input vectors
    rows: usize,

    /// the number of columns, i.e. the number of input vectors
    cols: usize,

    /// the number of [`BitBlock`]s used to store each row
    col_blocks: usize,

    /// row-major matrix data
    data: Vec<BitBlock>,
}

impl CoefficientMatrix {
    /// Builds the matrix whose columns are the given vectors.
    ///
    /// Fails if `vectors` is empty, if the first vector is empty, if the vectors do not all have
    /// the same length, or if some entry is not 0 or 1.
    pub fn from_vectors<V, B>(vectors: &[V]) -> Result<Self, InvalidInput>
    where
        V: AsRef<[B]>,
        B: BitCell,
    {
        let first = vectors.first().ok_or(InvalidInput::NoVectors)?;
        let rows = first.as_ref().len();
        if rows == 0 {
            return Err(InvalidInput::ZeroDimension);
        }

        let cols = vectors.len();
        let mut m = CoefficientMatrix::zeros(rows, cols);
        for (j, v) in vectors.iter().enumerate() {
            let v = v.as_ref();
            if v.len() != rows {
                return Err(InvalidInput::LengthMismatch {
                    index: j,
                    expected: rows,
                    found: v.len(),
                });
            }
            for (i, &cell) in v.iter().enumerate() {
                let b = cell.to_bit().ok_or(InvalidInput::NonBinaryEntry {
                    vector: j,
                    coordinate: i,
                })?;
                if b {
                    m.set_bit(i, j, true);
                }
            }
        }

        debug!(rows, cols, "built coefficient matrix");
        Ok(m)
    }

    /// Builds a matrix from a function `f(i, j)` giving each entry.
    pub fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut m = CoefficientMatrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                if f(i, j) {
                    m.set_bit(i, j, true);
                }
            }
        }
        m
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        let col_blocks = min_blocks(cols);
        CoefficientMatrix {
            rows,
            cols,
            col_blocks,
            data: vec![0; rows * col_blocks],
        }
    }

    /// Random matrix with each entry drawn uniformly from {0, 1}
    pub fn random(rng: &mut impl Rng, rows: usize, cols: usize) -> Self {
        let col_blocks = min_blocks(cols);
        let mask = BitBlock::MAX.wrapping_shl((BLOCKSIZE - (cols % BLOCKSIZE)) as u32);
        let data = (0..rows * col_blocks)
            .map(|i| {
                if i % col_blocks == col_blocks - 1 {
                    mask & rng.random::<BitBlock>()
                } else {
                    rng.random::<BitBlock>()
                }
            })
            .collect();
        CoefficientMatrix {
            rows,
            cols,
            col_blocks,
            data,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn bit(&self, i: usize, j: usize) -> bool {
        self.row(i).bit(j)
    }

    #[inline]
    pub fn set_bit(&mut self, i: usize, j: usize, b: bool) {
        self.row_mut(i).set_bit(j, b);
    }

    #[inline]
    pub fn row(&self, row: usize) -> &BitRow {
        BitRow::from_blocks(&self.data[row * self.col_blocks..(row + 1) * self.col_blocks])
    }

    #[inline]
    fn row_mut(&mut self, row: usize) -> &mut BitRow {
        BitRow::from_blocks_mut(&mut self.data[row * self.col_blocks..(row + 1) * self.col_blocks])
    }

    /// Number of 1s in a row
    #[inline]
    pub fn row_weight(&self, row: usize) -> usize {
        self.row(row).count_ones()
    }

    /// Compares two rows lexicographically, column 0 most significant.
    ///
    /// # Panics
    ///
    /// Panics if either row index is out of range.
    #[inline]
    pub fn compare_rows(&self, i1: usize, i2: usize) -> Ordering {
        assert!(
            i1 < self.rows && i2 < self.rows,
            "row index out of range: ({}, {}) for {} rows",
            i1,
            i2,
            self.rows
        );
        self.row(i1).cmp(self.row(i2))
    }

    /// Adds (XORs) row `from` into row `to`.
    pub fn add_row(&mut self, from: usize, to: usize) {
        let cb = self.col_blocks;
        if from == to {
            self.row_mut(to).clear();
            return;
        }
        let (lo, hi) = self.data.split_at_mut(from.max(to) * cb);
        let (source, target) = if from < to {
            (&lo[from * cb..(from + 1) * cb], &mut hi[..cb])
        } else {
            (&hi[..cb], &mut lo[to * cb..(to + 1) * cb])
        };
        *BitRow::from_blocks_mut(target) ^= BitRow::from_blocks(source);
    }

    /// Moves row `from` up to position `to`, shifting rows `to..from` down by one.
    pub fn move_row(&mut self, from: usize, to: usize) {
        debug_assert!(to <= from);
        let cb = self.col_blocks;
        self.data[to * cb..(from + 1) * cb].rotate_right(cb);
    }

    /// Sets column `j` to 0 in every row.
    pub fn clear_column(&mut self, j: usize) {
        let block = j / BLOCKSIZE;
        let mask = !bit_mask(j);
        for i in 0..self.rows {
            self.data[i * self.col_blocks + block] &= mask;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Formats the matrix one row per line, each cell preceded by a single space.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl Index<(usize, usize)> for CoefficientMatrix {
    type Output = bool;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if self.bit(index.0, index.1) {
            &true
        } else {
            &false
        }
    }
}

impl fmt::Display for CoefficientMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, " {}", if self[(i, j)] { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn columns_are_vectors() {
        let m = CoefficientMatrix::from_vectors(&[[1, 1, 0, 1], [0, 1, 1, 0]]).unwrap();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 2);
        let expected = [[1, 0], [1, 1], [0, 1], [1, 0]];
        for i in 0..4 {
            for j in 0..2 {
                assert_eq!(m[(i, j)], expected[i][j] == 1, "A[{i}][{j}]");
            }
        }
    }

    #[test]
    fn bool_vectors() {
        let m = CoefficientMatrix::from_vectors(&[vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(m, CoefficientMatrix::build(2, 2, |i, j| i == j));
    }

    #[test]
    fn invalid_input() {
        let empty: [[u8; 3]; 0] = [];
        assert_eq!(
            CoefficientMatrix::from_vectors(&empty),
            Err(InvalidInput::NoVectors)
        );
        assert_eq!(
            CoefficientMatrix::from_vectors(&[Vec::<u8>::new()]),
            Err(InvalidInput::ZeroDimension)
        );
        assert_eq!(
            CoefficientMatrix::from_vectors(&[vec![1, 0, 1], vec![1, 0]]),
            Err(InvalidInput::LengthMismatch {
                index: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            CoefficientMatrix::from_vectors(&[[1, 0], [0, 2]]),
            Err(InvalidInput::NonBinaryEntry {
                vector: 1,
                coordinate: 1
            })
        );
    }

    #[test]
    fn dump_format() {
        let m = CoefficientMatrix::from_vectors(&[[1, 1, 1], [0, 1, 1], [1, 0, 0]]).unwrap();
        assert_eq!(m.dump(), " 1 0 1\n 1 1 0\n 1 1 0\n");
    }

    #[test]
    fn move_row_shifts_down() {
        let mut m = CoefficientMatrix::build(4, 3, |i, j| i == j || (i == 3 && j == 0));
        let rows: Vec<Vec<bool>> = (0..4)
            .map(|i| (0..3).map(|j| m[(i, j)]).collect())
            .collect();
        m.move_row(3, 1);
        assert_eq!(m.row(0), CoefficientMatrix::build(1, 3, |_, j| rows[0][j]).row(0));
        assert_eq!(m.row(1), CoefficientMatrix::build(1, 3, |_, j| rows[3][j]).row(0));
        assert_eq!(m.row(2), CoefficientMatrix::build(1, 3, |_, j| rows[1][j]).row(0));
        assert_eq!(m.row(3), CoefficientMatrix::build(1, 3, |_, j| rows[2][j]).row(0));
    }

    #[test]
    fn add_row_and_clear_column() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m = CoefficientMatrix::random(&mut rng, 5, 130);
        let mut n = m.clone();
        n.add_row(0, 3);
        for j in 0..130 {
            assert_eq!(n[(3, j)], m[(3, j)] ^ m[(0, j)]);
        }

        n.add_row(4, 1);
        n.add_row(2, 2);
        for j in 0..130 {
            assert_eq!(n[(1, j)], m[(1, j)] ^ m[(4, j)]);
            assert!(!n[(2, j)]);
        }

        n.clear_column(129);
        n.clear_column(64);
        for i in 0..5 {
            assert!(!n[(i, 129)]);
            assert!(!n[(i, 64)]);
            let expected = match i {
                1 => m[(1, 63)] ^ m[(4, 63)],
                2 => false,
                3 => m[(3, 63)] ^ m[(0, 63)],
                _ => m[(i, 63)],
            };
            assert_eq!(n[(i, 63)], expected);
        }
    }

    #[test]
    fn random_keeps_padding_zero() {
        let mut rng = SmallRng::seed_from_u64(7);
        let m = CoefficientMatrix::random(&mut rng, 20, 70);
        for i in 0..20 {
            assert_eq!(m.row(i).blocks()[1] & (BitBlock::MAX >> 6), 0);
        }
    }
}
