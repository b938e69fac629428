//! Diagonal topology of the 32-square board.
//!
//! Neighbour lookups are compile-time tables derived from the row/column
//! layout described on [`Square`]. North is towards square 1 (White's back
//! rank), so White men advance south and Black men advance north.

use crate::color::Color;
use crate::piece::{Piece, Rank};
use crate::square::{Square, SQUARE_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Every direction, in generation order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    const NORTH: [Direction; 2] = [Direction::NorthEast, Direction::NorthWest];
    const SOUTH: [Direction; 2] = [Direction::SouthEast, Direction::SouthWest];

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }

    /// `(row, col)` step on the 8×8 grid.
    const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

static NEIGHBORS: [[Option<Square>; 4]; SQUARE_COUNT] = build_neighbors();

const fn build_neighbors() -> [[Option<Square>; 4]; SQUARE_COUNT] {
    let mut table = [[None; 4]; SQUARE_COUNT];
    let mut index = 0;
    while index < SQUARE_COUNT {
        let row = (index / 4) as i8;
        let col = (index % 4 * 2) as i8 + if row % 2 == 0 { 1 } else { 0 };
        let mut d = 0;
        while d < Direction::ALL.len() {
            let (dr, dc) = Direction::ALL[d].delta();
            table[index][d] = Square::from_coords(row + dr, col + dc);
            d += 1;
        }
        index += 1;
    }
    table
}

/// Adjacent square of `origin` in `direction`, `None` past the board edge.
#[inline]
pub fn next_square(origin: Square, direction: Direction) -> Option<Square> {
    NEIGHBORS[origin.index()][direction.slot()]
}

/// Squares beyond `origin` in `direction`, nearest first.
#[inline]
pub fn ray(origin: Square, direction: Direction) -> impl Iterator<Item = Square> {
    std::iter::successors(next_square(origin, direction), move |&sq| {
        next_square(sq, direction)
    })
}

/// Direction of the straight diagonal leading from `from` to `to`.
pub fn direction_between(from: Square, to: Square) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&dir| ray(from, dir).any(|sq| sq == to))
}

/// Directions a piece may move and capture in.
pub fn directions_for(piece: Piece) -> &'static [Direction] {
    match (piece.rank, piece.color) {
        (Rank::King, _) => &Direction::ALL,
        (Rank::Man, Color::White) => &Direction::SOUTH,
        (Rank::Man, Color::Black) => &Direction::NORTH,
    }
}
