//! Positional notation: `<turn>:<color><squares>:<color><squares>`.
//!
//! `W:W1,2,K3:B30,K31` is White to move, White men on 1 and 2, a White king on
//! 3, a Black man on 30 and a Black king on 31. Squares are 1-based; either
//! piece list may be empty but the board may not.

use crate::board_state::BoardState;
use crate::color::Color;
use crate::error::{NotationError, NotationErrorKind};
use crate::piece::{Piece, Rank};
use crate::square::Square;

const FIELD_SEPARATOR: char = ':';
const SQUARE_SEPARATOR: char = ',';
const KING_PREFIX: char = 'K';

pub fn parse_position(text: &str) -> Result<(BoardState, Color), NotationError> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(NotationError::new(NotationErrorKind::FieldCount, text));
    }

    let turn = parse_color(fields[0])?;

    let mut state = BoardState::empty();
    let mut seen: Option<Color> = None;
    for section in &fields[1..] {
        let mut chars = section.chars();
        let color = chars
            .next()
            .and_then(Color::from_char)
            .ok_or_else(|| NotationError::new(NotationErrorKind::UnknownColor, *section))?;
        if seen == Some(color) {
            return Err(NotationError::new(NotationErrorKind::RepeatedColor, *section));
        }
        seen = Some(color);

        parse_pieces(chars.as_str(), color, &mut state)?;
    }

    if state.is_empty() {
        return Err(NotationError::new(NotationErrorKind::EmptyBoard, text));
    }

    Ok((state, turn))
}

fn parse_color(field: &str) -> Result<Color, NotationError> {
    let mut chars = field.chars();
    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(NotationError::new(NotationErrorKind::UnknownColor, field)),
    }
}

fn parse_pieces(list: &str, color: Color, state: &mut BoardState) -> Result<(), NotationError> {
    if list.is_empty() {
        return Ok(());
    }

    for token in list.split(SQUARE_SEPARATOR) {
        let (rank, digits) = match token.strip_prefix(KING_PREFIX) {
            Some(rest) => (Rank::King, rest),
            None => (Rank::Man, token),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotationError::new(NotationErrorKind::MalformedSquare, token));
        }
        let square = digits
            .parse::<u32>()
            .ok()
            .and_then(Square::from_number)
            .ok_or_else(|| NotationError::new(NotationErrorKind::SquareOutOfRange, token))?;

        if state.is_occupied(square) {
            return Err(NotationError::new(NotationErrorKind::DuplicateSquare, token));
        }
        state.place(square, Piece::new(color, rank));
    }

    Ok(())
}

/// Canonical notation: White's section first, squares ascending.
pub fn format_position(state: &BoardState, turn: Color) -> String {
    let mut out = String::new();
    out.push(turn.to_char());

    for color in [Color::White, Color::Black] {
        out.push(FIELD_SEPARATOR);
        out.push(color.to_char());

        let squares: Vec<String> = state
            .pieces(color)
            .iter()
            .map(|square| match state.piece(square).rank {
                Rank::King => format!("{}{}", KING_PREFIX, square),
                Rank::Man => square.to_string(),
            })
            .collect();
        out.push_str(&squares.join(","));
    }

    out
}
