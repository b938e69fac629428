use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::{Square, SQUARE_COUNT};

/// A set of playable squares, one bit per square index (0..32).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u32);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// Single bit set for `square`.
    #[inline]
    pub const fn single(square: Square) -> Self {
        Bitboard(1u32 << square.index())
    }

    /// Construct from the raw mask.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Bitboard(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Test whether `square` is in the set.
    #[inline]
    pub const fn get(&self, square: Square) -> bool {
        (self.0 >> square.index()) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u32 << square.index();
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u32 << square.index());
    }

    /// Copy of `self` with `square` removed.
    #[inline]
    pub const fn without(self, square: Square) -> Self {
        Bitboard(self.0 & !(1u32 << square.index()))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonzero(&self) -> bool {
        self.0 != 0
    }

    /// Number of set bits.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the squares in the set, lowest index first.
    #[inline]
    pub fn iter(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::empty();
        for square in iter {
            bb.set(square);
        }
        bb
    }
}

/// Iterator over the squares of a `Bitboard`.
pub struct BitIterator {
    bits: u32,
}

impl Iterator for BitIterator {
    type Item = Square;
    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        debug_assert!((index as usize) < SQUARE_COUNT);
        Square::new(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIterator {}
