use std::fmt;

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    pub const fn man(color: Color) -> Self {
        Piece::new(color, Rank::Man)
    }

    pub const fn king(color: Color) -> Self {
        Piece::new(color, Rank::King)
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }
}

/// Two-letter code: color then rank (`WM`, `WK`, `BM`, `BK`).
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Man => 'M',
            Rank::King => 'K',
        };
        write!(f, "{}{}", self.color.to_char(), rank)
    }
}
