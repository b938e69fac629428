use draughts::board::Board;
use draughts::color::Color;
use draughts::error::NotationErrorKind;
use draughts::r#move::{Move, MoveKind};
use draughts::square::Square;

#[test]
fn canonical_positions_round_trip() {
    for text in [
        "W:W1,2,3,4,5,6,7,8:B25,26,27,28,29,30,31,32",
        "W:WK1,K3,4,5,6,7,8:BK18,25,26,27,29,31,32",
    ] {
        let board: Board = text.parse().expect("valid notation");
        assert_eq!(board.to_notation(), text);
    }
}

#[test]
fn opening_notation_matches_default_board() {
    let board = Board::from_notation("W:W1,2,3,4,5,6,7,8:B25,26,27,28,29,30,31,32")
        .expect("valid notation");
    assert_eq!(board, Board::new());
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn invalid_positions_are_rejected() {
    let cases = [
        ("X:B1:W2", NotationErrorKind::UnknownColor),
        ("B:B1,2,3,4,5,6,7,8,9:W2", NotationErrorKind::DuplicateSquare),
        ("B:WK0:B", NotationErrorKind::SquareOutOfRange),
        ("B:B10:B1", NotationErrorKind::RepeatedColor),
        ("B:B:W", NotationErrorKind::EmptyBoard),
        ("Invalid string.", NotationErrorKind::FieldCount),
        ("", NotationErrorKind::FieldCount),
    ];

    for (text, kind) in cases {
        match Board::from_notation(text) {
            Ok(board) => panic!("{:?} parsed as {}", text, board.to_notation()),
            Err(err) => assert_eq!(err.kind, kind, "{:?}", text),
        }
    }
}

fn squares(numbers: &[u32]) -> Vec<Square> {
    numbers
        .iter()
        .map(|&n| Square::from_number(n).expect("valid square number"))
        .collect()
}

#[test]
fn move_construction() {
    assert!(Move::new(squares(&[1, 2, 3]), MoveKind::Simple).is_err());
    assert!(Move::new(squares(&[1]), MoveKind::Simple).is_err());
    assert!(Move::new(squares(&[]), MoveKind::Simple).is_err());

    let long_jumps: [&[u32]; 7] = [
        &[1, 10],
        &[1, 10, 19],
        &[1, 10, 19, 26],
        &[1, 10, 19, 26, 17],
        &[1, 10, 19, 26, 17, 10],
        &[1, 10, 19, 26, 17, 10, 1],
        &[1, 10, 19, 26, 17, 10, 1, 10],
    ];
    for steps in long_jumps {
        let mv = Move::new(squares(steps), MoveKind::Jump).expect("diagonal jump");
        assert_eq!(mv.steps().len(), steps.len());
    }
}
