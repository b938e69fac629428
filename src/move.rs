use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::direction::direction_between;
use crate::error::MoveError;
use crate::square::Square;

/// Squares visited by a move, origin first.
pub type Steps = SmallVec<[Square; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple,
    Jump,
}

impl MoveKind {
    /// Separator between steps in move text.
    pub fn separator(&self) -> char {
        match self {
            MoveKind::Simple => '-',
            MoveKind::Jump => 'x',
        }
    }
}

/// A move: two or more squares on straight diagonal segments.
///
/// A simple move has exactly two steps. A jump lists the origin, every
/// intermediate landing square and the final square; each segment between two
/// steps passes over exactly one captured piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    steps: Steps,
    kind: MoveKind,
}

impl Move {
    /// Validated construction for moves coming from outside the generator.
    pub fn new<I>(steps: I, kind: MoveKind) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = Square>,
    {
        let steps: Steps = steps.into_iter().collect();

        if steps.len() < 2 {
            return Err(MoveError::TooFewSteps(steps.len()));
        }
        if kind == MoveKind::Simple && steps.len() != 2 {
            return Err(MoveError::SimpleMoveLength(steps.len()));
        }
        for pair in steps.windows(2) {
            if direction_between(pair[0], pair[1]).is_none() {
                return Err(MoveError::NotDiagonal {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }

        Ok(Move { steps, kind })
    }

    pub(crate) fn simple(from: Square, to: Square) -> Self {
        let mut steps = Steps::new();
        steps.push(from);
        steps.push(to);
        Move {
            steps,
            kind: MoveKind::Simple,
        }
    }

    pub(crate) fn jump(steps: Steps) -> Self {
        debug_assert!(steps.len() >= 2);
        Move {
            steps,
            kind: MoveKind::Jump,
        }
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn is_jump(&self) -> bool {
        self.kind == MoveKind::Jump
    }

    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    pub fn origin(&self) -> Square {
        self.steps[0]
    }

    pub fn destination(&self) -> Square {
        self.steps[self.steps.len() - 1]
    }
}

/// Move text: 1-based squares joined by `-` (simple) or `x` (jump),
/// e.g. `11-15` or `1x10x19`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.kind.separator();
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match (s.contains('x'), s.contains('-')) {
            (true, true) => return Err(MoveError::MixedSeparators(s.to_string())),
            (true, false) => MoveKind::Jump,
            (false, _) => MoveKind::Simple,
        };

        let steps = s
            .split(kind.separator())
            .map(|token| {
                token
                    .parse::<u32>()
                    .ok()
                    .and_then(Square::from_number)
                    .ok_or_else(|| MoveError::MalformedSquare(token.to_string()))
            })
            .collect::<Result<Steps, _>>()?;

        Move::new(steps, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(numbers: &[u32]) -> Vec<Square> {
        numbers
            .iter()
            .map(|&n| Square::from_number(n).expect("valid square number"))
            .collect()
    }

    #[test]
    fn test_simple_move_needs_two_steps() {
        assert_eq!(
            Move::new(squares(&[1, 5, 10]), MoveKind::Simple),
            Err(MoveError::SimpleMoveLength(3))
        );
        assert_eq!(
            Move::new(squares(&[1]), MoveKind::Simple),
            Err(MoveError::TooFewSteps(1))
        );
        assert_eq!(
            Move::new(squares(&[]), MoveKind::Simple),
            Err(MoveError::TooFewSteps(0))
        );
        assert!(Move::new(squares(&[1, 5]), MoveKind::Simple).is_ok());
    }

    #[test]
    fn test_jump_lengths() {
        assert_eq!(
            Move::new(squares(&[1]), MoveKind::Jump),
            Err(MoveError::TooFewSteps(1))
        );
        assert!(Move::new(squares(&[1, 10]), MoveKind::Jump).is_ok());
        assert!(Move::new(squares(&[1, 10, 19, 26, 17, 10]), MoveKind::Jump).is_ok());
    }

    #[test]
    fn test_rejects_non_diagonal_segment() {
        let err = Move::new(squares(&[1, 2]), MoveKind::Simple);
        assert!(matches!(err, Err(MoveError::NotDiagonal { .. })));

        let err = Move::new(squares(&[1, 10, 10]), MoveKind::Jump);
        assert!(matches!(err, Err(MoveError::NotDiagonal { .. })));
    }

    #[test]
    fn test_display() {
        let mv = Move::new(squares(&[1, 5]), MoveKind::Simple).expect("legal shape");
        assert_eq!(mv.to_string(), "1-5");

        let mv = Move::new(squares(&[1, 10, 19]), MoveKind::Jump).expect("legal shape");
        assert_eq!(mv.to_string(), "1x10x19");
        assert_eq!(mv.origin().number(), 1);
        assert_eq!(mv.destination().number(), 19);
    }

    #[test]
    fn test_parse() {
        let mv: Move = "6-10".parse().expect("parses");
        assert_eq!(mv.kind(), MoveKind::Simple);
        assert_eq!(mv.steps(), squares(&[6, 10]).as_slice());

        let mv: Move = "1x10x19".parse().expect("parses");
        assert!(mv.is_jump());
        assert_eq!(mv.steps().len(), 3);

        assert!(matches!("1-x10".parse::<Move>(), Err(MoveError::MixedSeparators(_))));
        assert!(matches!("0-5".parse::<Move>(), Err(MoveError::MalformedSquare(_))));
        assert!(matches!("a-b".parse::<Move>(), Err(MoveError::MalformedSquare(_))));
        assert!(matches!("".parse::<Move>(), Err(MoveError::MalformedSquare(_))));
        assert!(matches!("5".parse::<Move>(), Err(MoveError::TooFewSteps(1))));
    }
}
