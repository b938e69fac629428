//! Fixed-depth minimax search.
//!
//! Every node owns a cloned [`Board`]; there is no pruning, so moves with
//! equal scores are resolved by generation order.

use tracing::{debug, trace};

use crate::board::Board;
use crate::board_state::BoardState;
use crate::color::Color;
use crate::outcome::GameResult;
use crate::piece::Rank;
use crate::r#move::Move;
use crate::square::SQUARE_COUNT;

pub const DEFAULT_DEPTH: u32 = 6;

pub const WIN_SCORE: f64 = f64::INFINITY;
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

const KING_VALUE: f64 = 5.0;

/// Value of a man per square, from White's side of the board. Black men use
/// the mirrored entry.
#[rustfmt::skip]
const MAN_WEIGHTS: [f64; SQUARE_COUNT] = [
    1.3,  1.05, 1.3,  1.05,
    1.1,  1.0,  1.0,  1.0,
    1.0,  1.0,  1.0,  1.0,
    1.0,  1.05, 1.05, 1.0,
    1.0,  1.05, 1.05, 1.0,
    1.0,  1.0,  1.0,  1.0,
    1.0,  1.0,  1.0,  1.0,
    1.0,  1.0,  1.0,  1.0,
];

/// Picks moves for one side by searching `depth` plies below each reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solver {
    identity: Color,
    depth: u32,
}

impl Solver {
    pub fn new(identity: Color) -> Self {
        Self::with_depth(identity, DEFAULT_DEPTH)
    }

    pub fn with_depth(identity: Color, depth: u32) -> Self {
        Solver { identity, depth }
    }

    pub fn identity(&self) -> Color {
        self.identity
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Best reply in `board`, or `None` when there is nothing to play.
    ///
    /// Only a strictly better score replaces the running best, so among equal
    /// moves the first generated one is returned; if every move scores as a
    /// loss the first legal move is returned.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        let moves = board.legal_moves();
        let first = moves.first()?;

        debug!(
            identity = %self.identity,
            depth = self.depth,
            candidates = moves.len(),
            position = %board.to_notation(),
            "search started"
        );

        let maximizing = board.turn() == self.identity;
        let mut best_score = if maximizing { LOSS_SCORE } else { WIN_SCORE };
        let mut best = first;

        for mv in moves {
            let mut child = board.clone();
            child.perform_move(mv);
            let score = self.score(&child, self.depth);
            trace!(mv = %mv, score, "scored root move");

            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best = mv;
            }
        }

        debug!(best = %best, score = best_score, "search finished");
        Some(best.clone())
    }

    /// Minimax value of `board` from this solver's side, `depth` plies deep.
    ///
    /// A position with a single legal move is expanded without using up depth.
    pub fn score(&self, board: &Board, depth: u32) -> f64 {
        match board.result() {
            GameResult::Ongoing => {}
            GameResult::Draw => return 0.0,
            result if result.winner() == Some(self.identity) => return WIN_SCORE,
            _ => return LOSS_SCORE,
        }

        if depth == 0 {
            return self.evaluate(board.state());
        }

        let moves = board.legal_moves();
        if let [forced] = moves {
            let mut child = board.clone();
            child.perform_move(forced);
            return self.score(&child, depth);
        }

        let maximizing = board.turn() == self.identity;
        let mut best = if maximizing { LOSS_SCORE } else { WIN_SCORE };

        for mv in moves {
            let mut child = board.clone();
            child.perform_move(mv);
            let score = self.score(&child, depth - 1);

            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
            }
        }

        best
    }

    /// Static value of a layout from this solver's side: kings count
    /// [`KING_VALUE`] each, men their square weight.
    pub fn evaluate(&self, state: &BoardState) -> f64 {
        let own = self.identity;
        let enemy = own.opposite();

        let kings = state.count(own, Rank::King) as f64 - state.count(enemy, Rank::King) as f64;
        kings * KING_VALUE + men_value(state, own) - men_value(state, enemy)
    }
}

fn men_value(state: &BoardState, color: Color) -> f64 {
    state
        .pieces_of(color, Rank::Man)
        .iter()
        .map(|square| match color {
            Color::White => MAN_WEIGHTS[square.index()],
            Color::Black => MAN_WEIGHTS[SQUARE_COUNT - 1 - square.index()],
        })
        .sum()
}
