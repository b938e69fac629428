//! Legal move generation.
//!
//! Captures are mandatory, and when both kings and men can capture only the
//! king captures are legal. Capture chains are enumerated depth-first per
//! piece and direction; every chain is listed, there is no "take the most
//! pieces" rule.

use smallvec::smallvec;

use crate::bitboard::Bitboard;
use crate::board_state::BoardState;
use crate::color::Color;
use crate::direction::{directions_for, next_square, Direction};
use crate::piece::{Piece, Rank};
use crate::r#move::{Move, Steps};
use crate::square::Square;

/// Every pseudo-legal move of one side, grouped by precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub king_captures: Vec<Move>,
    pub man_captures: Vec<Move>,
    pub simple_moves: Vec<Move>,
}

impl MoveSet {
    pub fn has_captures(&self) -> bool {
        !self.king_captures.is_empty() || !self.man_captures.is_empty()
    }

    /// Apply king priority and mandatory capture.
    pub fn into_legal(self) -> Vec<Move> {
        if !self.king_captures.is_empty() {
            self.king_captures
        } else if !self.man_captures.is_empty() {
            self.man_captures
        } else {
            self.simple_moves
        }
    }
}

/// All three move groups for `side`, before precedence is applied.
pub fn generate_moves(state: &BoardState, side: Color) -> MoveSet {
    MoveSet {
        king_captures: captures(state, side, Rank::King),
        man_captures: captures(state, side, Rank::Man),
        simple_moves: simple_moves(state, side),
    }
}

/// Legal moves for `side`; stops at the first non-empty group.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn legal_moves(state: &BoardState, side: Color) -> Vec<Move> {
    let moves = captures(state, side, Rank::King);
    if !moves.is_empty() {
        return moves;
    }

    let moves = captures(state, side, Rank::Man);
    if !moves.is_empty() {
        return moves;
    }

    simple_moves(state, side)
}

fn captures(state: &BoardState, side: Color, rank: Rank) -> Vec<Move> {
    let piece = Piece::new(side, rank);
    let enemies = state.pieces(side.opposite());
    let mut moves = Vec::new();

    for origin in state.pieces_of(side, rank).iter() {
        for &dir in directions_for(piece) {
            for mut path in capture_paths(state, origin, piece, enemies, dir) {
                path.insert(0, origin);
                moves.push(Move::jump(path));
            }
        }
    }

    moves
}

/// Capture continuations of `piece` standing on `from`, heading in `dir`.
///
/// Returns the landing squares of each chain (without `from`). `enemies` holds
/// the pieces still capturable on this path; the board itself is left as it
/// was before the move, so captured pieces keep blocking landing squares.
fn capture_paths(
    state: &BoardState,
    from: Square,
    piece: Piece,
    enemies: Bitboard,
    dir: Direction,
) -> Vec<Steps> {
    let mut cursor = from;
    let target = loop {
        let Some(next) = next_square(cursor, dir) else {
            return Vec::new();
        };
        if state.is_color_at(next, piece.color) {
            return Vec::new();
        }
        if enemies.get(next) {
            break next;
        }
        if piece.rank == Rank::Man {
            return Vec::new();
        }
        cursor = next;
    };

    let remaining = enemies.without(target);
    let mut continued = Vec::new();
    let mut stops = Vec::new();

    let mut cursor = target;
    while let Some(landing) = next_square(cursor, dir) {
        if state.is_occupied(landing) {
            break;
        }
        stops.push(smallvec![landing]);

        for &next_dir in directions_for(piece) {
            if next_dir == dir.opposite() {
                continue;
            }
            for mut tail in capture_paths(state, landing, piece, remaining, next_dir) {
                tail.insert(0, landing);
                continued.push(tail);
            }
        }

        if piece.rank == Rank::Man {
            break;
        }
        cursor = landing;
    }

    if continued.is_empty() {
        stops
    } else {
        continued
    }
}

fn simple_moves(state: &BoardState, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for origin in state.pieces(side).iter() {
        let piece = state.piece(origin);
        for &dir in directions_for(piece) {
            let mut cursor = origin;
            while let Some(next) = next_square(cursor, dir) {
                if state.is_occupied(next) {
                    break;
                }
                moves.push(Move::simple(origin, next));
                if piece.rank == Rank::Man {
                    break;
                }
                cursor = next;
            }
        }
    }

    moves
}
