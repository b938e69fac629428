pub mod bitboard;
pub mod board;
pub mod board_state;
pub mod color;
pub mod direction;
pub mod error;
pub mod movegen;
pub mod r#move;
pub mod notation;
pub mod outcome;
pub mod piece;
pub mod solver;
pub mod square;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn draughts(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use color::Color;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyGameResult>()?;
    m.add_class::<PySolver>()?;
    m.add("WHITE", Color::White as i8)?;
    m.add("BLACK", Color::Black as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::{Board, DrawRules};
    use crate::color::Color;
    use crate::outcome::GameResult;
    use crate::r#move::Move;
    use crate::solver::Solver;
    use crate::square::Square;

    fn color_from_int(value: i8) -> PyResult<Color> {
        Color::from_int(value).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid color value {}",
                value
            ))
        })
    }

    fn square_from_number(number: u32) -> PyResult<Square> {
        Square::from_number(number).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Square must be between 1 and 32, got {}",
                number
            ))
        })
    }

    #[pyclass(name = "Board")]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        #[pyo3(signature = (notation=None))]
        pub fn new(notation: Option<&str>) -> PyResult<Self> {
            let board = match notation {
                Some(text) => Board::from_notation(text).map_err(|e| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
                })?,
                None => Board::new(),
            };
            Ok(PyBoard { board })
        }

        #[staticmethod]
        pub fn with_rules(
            notation: &str,
            no_progress_limit: u32,
            repetition_limit: usize,
        ) -> PyResult<Self> {
            let board = Board::from_notation(notation)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?
                .with_rules(DrawRules {
                    no_progress_limit,
                    repetition_limit,
                });
            Ok(PyBoard { board })
        }

        pub fn to_notation(&self) -> String {
            self.board.to_notation()
        }

        pub fn turn(&self) -> i8 {
            self.board.turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.board.is_over()
        }

        pub fn result(&self) -> PyGameResult {
            PyGameResult {
                result: self.board.result(),
            }
        }

        /// `(color, is_king)` of the piece on a 1-based square.
        pub fn get_piece(&self, square: u32) -> PyResult<Option<(i8, bool)>> {
            let square = square_from_number(square)?;
            Ok(self
                .board
                .state()
                .piece_at(square)
                .map(|piece| (piece.color as i8, piece.is_king())))
        }

        pub fn piece_count(&self, color: i8) -> PyResult<u32> {
            Ok(self.board.piece_count(color_from_int(color)?))
        }

        pub fn reversible_plies(&self) -> u32 {
            self.board.reversible_plies()
        }

        pub fn position_occurrences(&self) -> usize {
            self.board.position_occurrences()
        }

        pub fn legal_moves(&self) -> Vec<PyMove> {
            self.board
                .legal_moves()
                .iter()
                .map(|m| PyMove { move_: m.clone() })
                .collect()
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.board.is_legal_move(&move_.move_)
        }

        pub fn perform_move(&mut self, move_: &PyMove) -> PyResult<()> {
            if !self.board.is_legal_move(&move_.move_) {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Illegal move {}",
                    move_.move_
                )));
            }
            self.board.perform_move(&move_.move_);
            Ok(())
        }

        pub fn clone(&self) -> PyBoard {
            PyBoard {
                board: self.board.clone(),
            }
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();

            self.board.position_key().hash(&mut hasher);
            self.board.reversible_plies().hash(&mut hasher);

            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Board({:?})", self.board.to_notation())
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[new]
        pub fn new(text: &str) -> PyResult<Self> {
            text.parse()
                .map(|move_| PyMove { move_ })
                .map_err(|e: crate::error::MoveError| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
                })
        }

        pub fn is_jump(&self) -> bool {
            self.move_.is_jump()
        }

        /// Visited squares, 1-based.
        pub fn steps(&self) -> Vec<u8> {
            self.move_.steps().iter().map(|s| s.number()).collect()
        }

        pub fn origin(&self) -> u8 {
            self.move_.origin().number()
        }

        pub fn destination(&self) -> u8 {
            self.move_.destination().number()
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Move({:?})", self.move_.to_string())
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }

    #[pyclass(name = "GameResult")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyGameResult {
        result: GameResult,
    }

    #[pymethods]
    impl PyGameResult {
        pub fn is_over(&self) -> bool {
            self.result.is_over()
        }

        pub fn winner(&self) -> Option<i8> {
            self.result.winner().map(|color| color as i8)
        }

        pub fn is_draw(&self) -> bool {
            self.result.is_draw()
        }

        pub fn score_from_perspective(&self, perspective: i8) -> PyResult<f32> {
            Ok(self
                .result
                .score_from_perspective(color_from_int(perspective)?))
        }

        pub fn name(&self) -> String {
            self.result.to_string()
        }

        pub fn __str__(&self) -> String {
            self.result.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("GameResult({})", self.result)
        }

        pub fn __eq__(&self, other: &PyGameResult) -> bool {
            self.result == other.result
        }
    }

    #[pyclass(name = "Solver")]
    #[derive(Clone, Copy, Debug)]
    pub struct PySolver {
        solver: Solver,
    }

    #[pymethods]
    impl PySolver {
        #[new]
        #[pyo3(signature = (identity, depth=crate::solver::DEFAULT_DEPTH))]
        pub fn new(identity: i8, depth: u32) -> PyResult<Self> {
            Ok(PySolver {
                solver: Solver::with_depth(color_from_int(identity)?, depth),
            })
        }

        pub fn identity(&self) -> i8 {
            self.solver.identity() as i8
        }

        pub fn depth(&self) -> u32 {
            self.solver.depth()
        }

        pub fn best_move(&self, board: &PyBoard) -> Option<PyMove> {
            self.solver
                .best_move(&board.board)
                .map(|move_| PyMove { move_ })
        }

        pub fn evaluate(&self, board: &PyBoard) -> f64 {
            self.solver.evaluate(board.board.state())
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Solver(identity={}, depth={})",
                self.solver.identity(),
                self.solver.depth()
            )
        }
    }
}
