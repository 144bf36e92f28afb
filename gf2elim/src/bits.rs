use ref_cast::RefCast;
use std::ops::BitXorAssign;

/// A block of bits. This is an alias for [`u64`]
pub type BitBlock = u64;

/// Number of bits in a [`BitBlock`]
pub const BLOCKSIZE: usize = 64;

/// The most significant bit of a [`BitBlock`], which holds the lowest-indexed bit of the block
pub const MSB_ON: BitBlock = 0x8000000000000000;

/// Returns the minimum number of [`BitBlock`]s required to store the given number of bits.
#[inline]
pub fn min_blocks(bits: usize) -> usize {
    bits / BLOCKSIZE + if bits % BLOCKSIZE == 0 { 0 } else { 1 }
}

/// Mask selecting bit `index` inside its block.
#[inline]
pub(crate) fn bit_mask(index: usize) -> BitBlock {
    MSB_ON >> (index % BLOCKSIZE)
}

/// One row of a coefficient matrix, borrowed as a slice of [`BitBlock`]s.
///
/// Bit `j` lives in block `j / BLOCKSIZE`, most significant bit first. Unused bits in the last
/// block are kept at 0, so comparing two rows of equal width as block slices is the same as
/// comparing them lexicographically bit by bit, with bit 0 most significant. The derived `Ord`
/// relies on that.
#[derive(RefCast, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct BitRow([BitBlock]);

impl BitRow {
    #[inline]
    pub(crate) fn from_blocks(blocks: &[BitBlock]) -> &BitRow {
        BitRow::ref_cast(blocks)
    }

    #[inline]
    pub(crate) fn from_blocks_mut(blocks: &mut [BitBlock]) -> &mut BitRow {
        BitRow::ref_cast_mut(blocks)
    }

    /// Returns the value of the bit at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if the index is past the last block.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.0[index / BLOCKSIZE] & bit_mask(index) != 0
    }

    /// Sets the bit at the given index to the provided value.
    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        let block = &mut self.0[index / BLOCKSIZE];
        if value {
            *block |= bit_mask(index);
        } else {
            *block &= !bit_mask(index);
        }
    }

    /// Position of the leftmost 1, i.e. the pivot column of this row.
    pub fn first_one(&self) -> Option<usize> {
        self.0
            .iter()
            .position(|&b| b != 0)
            .map(|i| i * BLOCKSIZE + self.0[i].leading_zeros() as usize)
    }

    /// Position of the rightmost 1.
    pub fn last_one(&self) -> Option<usize> {
        self.0
            .iter()
            .rposition(|&b| b != 0)
            .map(|i| i * BLOCKSIZE + (BLOCKSIZE - 1) - self.0[i].trailing_zeros() as usize)
    }

    /// Number of 1s in the row.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.0.fill(0);
    }

    #[inline]
    pub fn blocks(&self) -> &[BitBlock] {
        &self.0
    }
}

impl BitXorAssign<&BitRow> for BitRow {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &BitRow) {
        for (bits0, bits1) in self.0.iter_mut().zip(rhs.0.iter()) {
            *bits0 ^= bits1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cmp::Ordering;

    fn row_of(bits: &[usize], blocks: usize) -> Vec<BitBlock> {
        let mut data = vec![0; blocks];
        let row = BitRow::from_blocks_mut(&mut data);
        for &b in bits {
            row.set_bit(b, true);
        }
        data
    }

    #[test]
    fn msb_first_layout() {
        let data = row_of(&[0, 63, 64], 2);
        assert_eq!(data, vec![MSB_ON | 1, MSB_ON]);
    }

    #[test]
    fn get_set() {
        let bits = [0, 3, 100, 127];
        let mut data = row_of(&bits, 2);
        let row = BitRow::from_blocks_mut(&mut data);
        for i in 0..128 {
            assert_eq!(row.bit(i), bits.contains(&i));
        }
        row.set_bit(100, false);
        assert!(!row.bit(100));
        assert_eq!(row.count_ones(), 3);
    }

    #[test]
    fn first_and_last_one() {
        let data = row_of(&[70, 5, 90], 2);
        let row = BitRow::from_blocks(&data);
        assert_eq!(row.first_one(), Some(5));
        assert_eq!(row.last_one(), Some(90));

        let data = row_of(&[64], 3);
        let row = BitRow::from_blocks(&data);
        assert_eq!(row.first_one(), Some(64));
        assert_eq!(row.last_one(), Some(64));

        let data = vec![0; 2];
        let row = BitRow::from_blocks(&data);
        assert!(row.is_zero());
        assert_eq!(row.first_one(), None);
        assert_eq!(row.last_one(), None);
    }

    #[test]
    fn block_order_is_lexicographic() {
        // an earlier 1 ranks higher, across block boundaries too
        let a = row_of(&[1], 2);
        let b = row_of(&[2, 3, 64, 65], 2);
        assert_eq!(BitRow::from_blocks(&a).cmp(BitRow::from_blocks(&b)), Ordering::Greater);

        let a = row_of(&[0, 70], 2);
        let b = row_of(&[0, 66], 2);
        assert_eq!(BitRow::from_blocks(&a).cmp(BitRow::from_blocks(&b)), Ordering::Less);

        let a = row_of(&[9, 99], 2);
        assert_eq!(BitRow::from_blocks(&a).cmp(BitRow::from_blocks(&a.clone())), Ordering::Equal);
    }

    #[test]
    fn xor_assign() {
        let mut a = row_of(&[0, 5, 70], 2);
        let b = row_of(&[5, 71], 2);
        *BitRow::from_blocks_mut(&mut a) ^= BitRow::from_blocks(&b);
        assert_eq!(a, row_of(&[0, 70, 71], 2));
    }
}
