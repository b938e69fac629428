use std::fmt;

/// Side length of the full checkered board.
pub const BOARD_SIZE: u8 = 8;

/// Number of playable (dark) squares.
pub const SQUARE_COUNT: usize = 32;

const SQUARES_PER_ROW: u8 = BOARD_SIZE / 2;

/// One of the 32 playable squares, indexed 0..32 row by row from White's
/// back rank. Square numbers in notation are 1-based.
///
/// Rows with an even index hold their squares on the odd columns, rows with an
/// odd index on the even columns:
///
/// ```text
///  row 0:  .  1  .  2  .  3  .  4
///  row 1:  5  .  6  .  7  .  8  .
///  ...
///  row 7: 29  . 30  . 31  . 32  .
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Square from a 0-based index, `None` outside 0..32.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < SQUARE_COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Square from its 1-based notation number.
    #[inline]
    pub const fn from_number(number: u32) -> Option<Self> {
        if number >= 1 && number <= SQUARE_COUNT as u32 {
            Some(Square(number as u8 - 1))
        } else {
            None
        }
    }

    /// Square at `(row, col)` of the 8×8 grid, `None` for light squares and
    /// coordinates off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || row >= BOARD_SIZE as i8 || col >= BOARD_SIZE as i8 {
            return None;
        }
        if (row + col) % 2 == 0 {
            return None;
        }
        Some(Square(row as u8 * SQUARES_PER_ROW + col as u8 / 2))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number used by the notation.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / SQUARES_PER_ROW
    }

    #[inline]
    pub const fn col(self) -> u8 {
        let offset = self.0 % SQUARES_PER_ROW * 2;
        if self.row() % 2 == 0 {
            offset + 1
        } else {
            offset
        }
    }

    /// All squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert!(Square::new(0).is_some());
        assert!(Square::new(31).is_some());
        assert!(Square::new(32).is_none());
    }

    #[test]
    fn test_numbers_are_one_based() {
        assert!(Square::from_number(0).is_none());
        assert!(Square::from_number(33).is_none());
        let first = Square::from_number(1).expect("square 1");
        assert_eq!(first.index(), 0);
        assert_eq!(first.to_string(), "1");
        assert_eq!(Square::from_number(32).map(Square::index), Some(31));
    }

    #[test]
    fn test_coordinates() {
        let s = Square::new(0).expect("square");
        assert_eq!((s.row(), s.col()), (0, 1));
        let s = Square::new(4).expect("square");
        assert_eq!((s.row(), s.col()), (1, 0));
        let s = Square::new(31).expect("square");
        assert_eq!((s.row(), s.col()), (7, 6));
    }

    #[test]
    fn test_coords_round_trip() {
        for square in Square::all() {
            let back = Square::from_coords(square.row() as i8, square.col() as i8);
            assert_eq!(back, Some(square));
        }
        assert!(Square::from_coords(0, 0).is_none());
        assert!(Square::from_coords(-1, 0).is_none());
        assert!(Square::from_coords(7, 8).is_none());
    }
}
