//! Error types for notation parsing and move construction.

use thiserror::Error;

use crate::square::Square;

/// What went wrong while reading positional notation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotationErrorKind {
    /// The string does not split into turn and two piece sections
    #[error("expected `<turn>:<color><squares>:<color><squares>`")]
    FieldCount,

    /// A color letter other than `W` or `B`
    #[error("unknown color")]
    UnknownColor,

    /// Both piece sections name the same color
    #[error("color section given twice")]
    RepeatedColor,

    /// A square token that is empty or not a number
    #[error("malformed square")]
    MalformedSquare,

    #[error("square outside 1..32")]
    SquareOutOfRange,

    /// A square listed more than once, in one section or across both
    #[error("square listed twice")]
    DuplicateSquare,

    #[error("position has no pieces")]
    EmptyBoard,
}

/// Rejected positional notation: the kind of failure and the offending
/// fragment of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {fragment:?}")]
pub struct NotationError {
    pub kind: NotationErrorKind,
    pub fragment: String,
}

impl NotationError {
    pub(crate) fn new(kind: NotationErrorKind, fragment: impl Into<String>) -> Self {
        NotationError {
            kind,
            fragment: fragment.into(),
        }
    }
}

/// Errors building or parsing a [`Move`](crate::r#move::Move).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("a move needs at least two steps, got {0}")]
    TooFewSteps(usize),

    #[error("a simple move has exactly two steps, got {0}")]
    SimpleMoveLength(usize),

    #[error("squares {from} and {to} are not on one diagonal")]
    NotDiagonal { from: Square, to: Square },

    #[error("malformed square {0:?} in move")]
    MalformedSquare(String),

    #[error("move {0:?} mixes `-` and `x` separators")]
    MixedSeparators(String),
}
