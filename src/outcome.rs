use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[default]
    Ongoing,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameResult {
    /// Win for `color`.
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWon,
            Color::Black => GameResult::BlackWon,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWon => Some(Color::White),
            GameResult::BlackWon => Some(Color::Black),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }

    /// `1.0` for a win of `perspective`, `-1.0` for a loss, `0.0` otherwise.
    pub fn score_from_perspective(&self, perspective: Color) -> f32 {
        match self.winner() {
            Some(winner) if winner == perspective => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "ongoing"),
            GameResult::WhiteWon => write!(f, "White won"),
            GameResult::BlackWon => write!(f, "Black won"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
