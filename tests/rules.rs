use std::collections::BTreeSet;

use draughts::board::{Board, DrawRules};
use draughts::color::Color;
use draughts::outcome::GameResult;
use draughts::piece::Piece;
use draughts::r#move::{Move, MoveKind};
use draughts::solver::Solver;
use draughts::square::Square;

fn board(notation: &str) -> Board {
    Board::from_notation(notation).expect("valid notation")
}

fn move_texts(board: &Board) -> BTreeSet<String> {
    board.legal_moves().iter().map(|m| m.to_string()).collect()
}

fn play(board: &mut Board, text: &str) {
    let mv: Move = text.parse().expect("valid move text");
    board.perform_move(&mv);
}

fn sq(number: u32) -> Square {
    Square::from_number(number).expect("valid square number")
}

#[test]
fn opening_moves() {
    let expected: BTreeSet<String> = ["5-9", "6-9", "6-10", "7-10", "7-11", "8-11", "8-12"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(move_texts(&Board::new()), expected);
}

#[test]
fn capture_is_mandatory() {
    let mut board = Board::new();
    play(&mut board, "7-11");
    play(&mut board, "26-22");
    play(&mut board, "11-15");
    play(&mut board, "22-18");

    // Black's 22 was vacated, so 15 can jump 18.
    assert!(board.legal_moves().iter().all(Move::is_jump));
    assert!(move_texts(&board).contains("15x22"));
}

#[test]
fn king_captures_take_priority() {
    let board = board("W:WK32,21:B27,25");
    assert!(!board.legal_moves().is_empty());
    assert!(board
        .legal_moves()
        .iter()
        .all(|m| m.is_jump() && m.origin() == sq(32)));
}

#[test]
fn men_capture_when_no_king_can() {
    let board = board("W:WK1,21:B27,25");
    assert_eq!(move_texts(&board), BTreeSet::from(["21x30".to_string()]));
}

#[test]
fn promotion_is_immediate_and_permanent() {
    let mut board = board("W:W26:B5,9");
    play(&mut board, "26-30");
    assert_eq!(board.state().piece(sq(30)), Piece::king(Color::White));

    play(&mut board, "9-6");
    play(&mut board, "30-26");
    assert_eq!(board.state().piece(sq(26)), Piece::king(Color::White));
}

#[test]
fn black_promotes_on_row_zero() {
    let mut board = board("B:W32:B6");
    play(&mut board, "6-2");
    assert_eq!(board.state().piece(sq(2)), Piece::king(Color::Black));
}

#[test]
fn capture_chain_stops_at_the_edge() {
    let mut board = board("W:W19:B23,31");
    play(&mut board, "19x26");
    assert_eq!(board.state().piece(sq(26)), Piece::man(Color::White));
    assert!(board.state().is_occupied(sq(31)));
}

#[test]
fn losing_all_pieces_loses() {
    let mut board = board("W:W6:B10");
    play(&mut board, "6x15");
    assert_eq!(board.result(), GameResult::WhiteWon);
    assert!(board.is_over());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn blocked_side_draws() {
    let board = board("B:W18,21,22:B25");
    assert_eq!(board.result(), GameResult::Draw);
}

#[test]
fn threefold_repetition_draws() {
    let mut board = board("W:WK1:BK32");
    let shuffle = ["1-5", "32-28", "5-1", "28-32"];

    for (ply, text) in shuffle.iter().cycle().take(9).enumerate() {
        assert!(!board.is_over(), "game ended early at ply {}", ply);
        play(&mut board, text);
    }
    assert_eq!(board.result(), GameResult::Draw);
}

#[test]
fn no_progress_draws() {
    let rules = DrawRules {
        no_progress_limit: 15,
        repetition_limit: usize::MAX,
    };
    let mut board = board("W:WK1:BK32").with_rules(rules);
    let shuffle = ["1-5", "32-28", "5-1", "28-32"];

    for text in shuffle.iter().cycle().take(15) {
        assert!(!board.is_over());
        play(&mut board, text);
    }
    assert_eq!(board.reversible_plies(), 15);
    assert_eq!(board.result(), GameResult::Draw);
}

#[test]
fn capture_resets_no_progress() {
    let mut board = board("W:WK1:BK32,15");
    assert_eq!(board.legal_moves()[0].kind(), MoveKind::Jump);
    play(&mut board, "1x19");
    assert_eq!(board.reversible_plies(), 0);

    play(&mut board, "32-28");
    assert_eq!(board.reversible_plies(), 1);
}

#[test]
fn solver_is_deterministic() {
    let board = board("W:W1,2,3,5,6,7,10:B21,22,25,26,27,29,30");
    let solver = Solver::with_depth(Color::White, 3);
    let first = solver.best_move(&board);
    assert!(first.is_some());
    assert_eq!(solver.best_move(&board), first);
}

#[test]
fn solver_plays_a_full_game() {
    let mut board = Board::new();
    let white = Solver::with_depth(Color::White, 1);
    let black = Solver::with_depth(Color::Black, 1);

    let mut plies = 0;
    while !board.is_over() {
        let solver = if board.turn() == Color::White { &white } else { &black };
        let mv = solver.best_move(&board).expect("ongoing game has moves");
        board.perform_move(&mv);
        plies += 1;
        assert!(plies < 2000);
    }
    assert_eq!(Solver::new(board.turn()).best_move(&board), None);
}
