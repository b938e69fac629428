use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece::{Piece, Rank};
use crate::square::{Square, BOARD_SIZE};

/// Men on squares 1–8 (White) and 25–32 (Black).
const START_OCCUPIED: u32 = 0xff00_00ff;
const START_WHITE: u32 = 0x0000_00ff;

/// Piece layout packed into three parallel bitboards.
///
/// `white` and `kings` only carry bits where `occupied` does; every mutation
/// clears them on vacated squares so that equal layouts compare and hash equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoardState {
    occupied: Bitboard,
    white: Bitboard,
    kings: Bitboard,
}

impl BoardState {
    pub const fn empty() -> Self {
        BoardState {
            occupied: Bitboard::empty(),
            white: Bitboard::empty(),
            kings: Bitboard::empty(),
        }
    }

    /// The initial layout: eight men per side on their first two rows.
    pub const fn start() -> Self {
        BoardState {
            occupied: Bitboard::from_bits(START_OCCUPIED),
            white: Bitboard::from_bits(START_WHITE),
            kings: Bitboard::empty(),
        }
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied.get(square)
    }

    #[inline]
    pub fn is_color_at(&self, square: Square, color: Color) -> bool {
        self.occupied.get(square) && self.white.get(square) == (color == Color::White)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.occupied.get(square) {
            return None;
        }
        let color = if self.white.get(square) {
            Color::White
        } else {
            Color::Black
        };
        let rank = if self.kings.get(square) {
            Rank::King
        } else {
            Rank::Man
        };
        Some(Piece::new(color, rank))
    }

    /// Piece on an occupied square. Reading an empty square is a caller bug.
    pub fn piece(&self, square: Square) -> Piece {
        match self.piece_at(square) {
            Some(piece) => piece,
            None => panic!("no piece on square {}", square),
        }
    }

    /// Put `piece` on `square`, replacing whatever was there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.occupied.set(square);
        if piece.color == Color::White {
            self.white.set(square);
        } else {
            self.white.clear(square);
        }
        if piece.is_king() {
            self.kings.set(square);
        } else {
            self.kings.clear(square);
        }
    }

    /// Vacate `square`, returning the piece that stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        self.occupied.clear(square);
        self.white.clear(square);
        self.kings.clear(square);
        piece
    }

    /// Crown the man on `square`.
    pub fn promote(&mut self, square: Square) {
        assert!(
            self.occupied.get(square) && !self.kings.get(square),
            "square {} does not hold a man",
            square
        );
        self.kings.set(square);
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Squares holding pieces of `color`.
    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.occupied & self.white,
            Color::Black => self.occupied & !self.white,
        }
    }

    /// Squares holding pieces of `color` and `rank`.
    #[inline]
    pub fn pieces_of(&self, color: Color, rank: Rank) -> Bitboard {
        match rank {
            Rank::King => self.pieces(color) & self.kings,
            Rank::Man => self.pieces(color) & !self.kings,
        }
    }

    pub fn count(&self, color: Color, rank: Rank) -> u32 {
        self.pieces_of(color, rank).count()
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces(color).is_nonzero()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

/// Grid view: dark squares show a piece code or their number, light squares
/// stay blank.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("|{}", "----|".repeat(BOARD_SIZE as usize));

        for row in 0..BOARD_SIZE as i8 {
            writeln!(f, "{}", separator)?;
            write!(f, "|")?;

            for col in 0..BOARD_SIZE as i8 {
                match Square::from_coords(row, col) {
                    Some(square) => match self.piece_at(square) {
                        Some(piece) => write!(f, " {} |", piece)?,
                        None => write!(f, " {:>2} |", square.number())?,
                    },
                    None => write!(f, "    |")?,
                }
            }

            writeln!(f)?;
        }

        writeln!(f, "{}", separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(number: u32) -> Square {
        Square::from_number(number).expect("valid square number")
    }

    #[test]
    fn test_start_layout() {
        let state = BoardState::start();
        assert_eq!(state.pieces(Color::White).count(), 8);
        assert_eq!(state.pieces(Color::Black).count(), 8);
        assert_eq!(state.piece_at(sq(1)), Some(Piece::man(Color::White)));
        assert_eq!(state.piece_at(sq(8)), Some(Piece::man(Color::White)));
        assert_eq!(state.piece_at(sq(25)), Some(Piece::man(Color::Black)));
        assert!(state.piece_at(sq(9)).is_none());
        assert_eq!(state.count(Color::White, Rank::King), 0);
    }

    #[test]
    fn test_place_and_remove() {
        let mut state = BoardState::empty();
        state.place(sq(14), Piece::king(Color::Black));
        assert!(state.is_color_at(sq(14), Color::Black));
        assert!(!state.is_color_at(sq(14), Color::White));
        assert_eq!(state.count(Color::Black, Rank::King), 1);

        assert_eq!(state.remove(sq(14)), Some(Piece::king(Color::Black)));
        assert!(state.is_empty());
        assert_eq!(state.remove(sq(14)), None);
    }

    #[test]
    fn test_vacated_squares_compare_equal() {
        let mut state = BoardState::empty();
        state.place(sq(3), Piece::king(Color::White));
        state.remove(sq(3));
        assert_eq!(state, BoardState::empty());
    }

    #[test]
    fn test_replace_piece() {
        let mut state = BoardState::empty();
        state.place(sq(20), Piece::king(Color::White));
        state.place(sq(20), Piece::man(Color::Black));
        assert_eq!(state.piece(sq(20)), Piece::man(Color::Black));
        assert_eq!(state.remove(sq(20)), Some(Piece::man(Color::Black)));
        assert!(!state.is_occupied(sq(20)));
    }

    #[test]
    fn test_promote() {
        let mut state = BoardState::empty();
        state.place(sq(30), Piece::man(Color::White));
        state.promote(sq(30));
        assert_eq!(state.piece(sq(30)), Piece::king(Color::White));
    }

    #[test]
    #[should_panic]
    fn test_promote_king_panics() {
        let mut state = BoardState::empty();
        state.place(sq(30), Piece::king(Color::White));
        state.promote(sq(30));
    }

    #[test]
    #[should_panic]
    fn test_piece_on_empty_square_panics() {
        BoardState::empty().piece(sq(12));
    }

    #[test]
    fn test_display_grid() {
        let text = BoardState::start().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "|----|----|----|----|----|----|----|----|");
        assert_eq!(lines[1], "|    | WM |    | WM |    | WM |    | WM |");
        assert_eq!(lines[5], "|    |  9 |    | 10 |    | 11 |    | 12 |");
        assert_eq!(lines[15], "| BM |    | BM |    | BM |    | BM |    |");
    }
}
