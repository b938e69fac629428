use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::board_state::BoardState;
use crate::color::Color;
use crate::direction::{direction_between, ray};
use crate::error::NotationError;
use crate::movegen;
use crate::notation::{format_position, parse_position};
use crate::outcome::GameResult;
use crate::r#move::Move;
use crate::square::Square;

pub const DEFAULT_NO_PROGRESS_LIMIT: u32 = 15;
pub const DEFAULT_REPETITION_LIMIT: usize = 3;

/// Layout plus side to move; what repetition is judged on.
pub type PositionKey = (BoardState, Color);

/// Limits for the two draw rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawRules {
    /// Consecutive reversible plies that end the game in a draw.
    pub no_progress_limit: u32,
    /// Occurrences of one position within the reversible history that end
    /// the game in a draw.
    pub repetition_limit: usize,
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            no_progress_limit: DEFAULT_NO_PROGRESS_LIMIT,
            repetition_limit: DEFAULT_REPETITION_LIMIT,
        }
    }
}

/// A game in progress: the layout, whose turn it is, the legal replies and
/// the draw bookkeeping.
///
/// The legal-move list and the result are recomputed eagerly after every
/// move, so all queries are cheap. Once the game is over the legal-move list
/// is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    state: BoardState,
    turn: Color,
    legal_moves: Vec<Move>,
    result: GameResult,
    reversible_plies: u32,
    history: Vec<PositionKey>,
    rules: DrawRules,
}

impl Board {
    /// Standard opening layout, White to move.
    pub fn new() -> Self {
        Self::from_position(BoardState::start(), Color::White)
    }

    pub fn from_position(state: BoardState, turn: Color) -> Self {
        let mut board = Board {
            state,
            turn,
            legal_moves: movegen::legal_moves(&state, turn),
            result: GameResult::Ongoing,
            reversible_plies: 0,
            history: Vec::new(),
            rules: DrawRules::default(),
        };
        board.assess_result();
        board
    }

    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let (state, turn) = parse_position(text)?;
        Ok(Self::from_position(state, turn))
    }

    /// Replace the draw limits and reassess the result under them.
    pub fn with_rules(mut self, rules: DrawRules) -> Self {
        self.rules = rules;
        self.legal_moves = movegen::legal_moves(&self.state, self.turn);
        self.assess_result();
        self
    }

    pub fn to_notation(&self) -> String {
        format_position(&self.state, self.turn)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Consecutive non-capturing king moves played so far.
    pub fn reversible_plies(&self) -> u32 {
        self.reversible_plies
    }

    /// How often the current position occurs in the reversible history.
    pub fn position_occurrences(&self) -> usize {
        let key = self.position_key();
        self.history.iter().filter(|&&entry| entry == key).count()
    }

    pub fn position_key(&self) -> PositionKey {
        (self.state, self.turn)
    }

    pub fn piece_count(&self, color: Color) -> u32 {
        self.state.pieces(color).count()
    }

    /// Play `mv` for the side to move.
    ///
    /// # Panics
    ///
    /// If `mv` is not one of [`Board::legal_moves`].
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn perform_move(&mut self, mv: &Move) {
        assert!(
            self.is_legal_move(mv),
            "{} is not a legal move for {} in {}",
            mv,
            self.turn,
            self.to_notation()
        );

        let origin = mv.origin();
        let destination = mv.destination();
        let piece = self.state.piece(origin);
        self.state.remove(origin);

        if mv.is_jump() {
            for pair in mv.steps().windows(2) {
                self.remove_captured(pair[0], pair[1]);
            }
        }

        self.state.place(destination, piece);
        if !piece.is_king() && destination.row() == piece.color.promotion_row() {
            self.state.promote(destination);
        }

        trace!(mv = %mv, color = %self.turn, "performed move");

        self.turn = self.turn.opposite();
        self.legal_moves = movegen::legal_moves(&self.state, self.turn);

        if piece.is_king() && !mv.is_jump() {
            self.reversible_plies += 1;
            self.history.push(self.position_key());
        } else {
            self.reversible_plies = 0;
            self.history.clear();
        }

        self.assess_result();
    }

    /// Remove the first piece between two consecutive jump steps.
    fn remove_captured(&mut self, from: Square, to: Square) {
        let Some(dir) = direction_between(from, to) else {
            unreachable!("jump segment {}-{} is not diagonal", from, to);
        };
        let captured = ray(from, dir)
            .take_while(|&square| square != to)
            .find(|&square| self.state.is_occupied(square));
        let Some(square) = captured else {
            unreachable!("no piece to capture between {} and {}", from, to);
        };
        let removed = self.state.remove(square);
        debug_assert!(
            matches!(removed, Some(piece) if piece.color != self.turn),
            "captured own piece on {}",
            square
        );
    }

    fn assess_result(&mut self) {
        let (result, reason) = if self.reversible_plies >= self.rules.no_progress_limit {
            (GameResult::Draw, "no progress")
        } else if self.position_occurrences() >= self.rules.repetition_limit {
            (GameResult::Draw, "repetition")
        } else if self.legal_moves.is_empty() {
            let outcome = match (
                self.state.has_pieces(Color::White),
                self.state.has_pieces(Color::Black),
            ) {
                (true, false) => GameResult::won_by(Color::White),
                (false, true) => GameResult::won_by(Color::Black),
                _ => GameResult::Draw,
            };
            (outcome, "no legal moves")
        } else {
            (GameResult::Ongoing, "")
        };

        self.result = result;
        if result.is_over() {
            self.legal_moves.clear();
            debug!(result = %result, reason, position = %self.to_notation(), "game over");
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)?;
        if self.is_over() {
            write!(f, "Game over: {}", self.result)
        } else {
            write!(f, "Next player: {}", self.turn)
        }
    }
}
