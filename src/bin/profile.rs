//! Self-play between two solvers, for profiling the search.
//!
//! ```text
//! RUST_LOG=debug cargo run --release --features hotpath --bin profile -- --depth 4
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use draughts::board::Board;
use draughts::color::Color;
use draughts::solver::{Solver, DEFAULT_DEPTH};

#[derive(Parser, Debug)]
#[command(about = "Play a solver against itself and report the result")]
struct Args {
    /// Search depth for both sides.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Starting position in positional notation; the opening layout if omitted.
    #[arg(short, long)]
    position: Option<String>,

    /// Stop after this many plies even if the game is not over.
    #[arg(short, long, default_value_t = 200)]
    max_plies: usize,

    /// Print the board after every move.
    #[arg(long)]
    show: bool,
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut board = match args.position.as_deref() {
        Some(text) => match Board::from_notation(text) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("invalid position: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Board::new(),
    };

    let white = Solver::with_depth(Color::White, args.depth);
    let black = Solver::with_depth(Color::Black, args.depth);

    let mut plies = 0;
    while !board.is_over() && plies < args.max_plies {
        let solver = match board.turn() {
            Color::White => &white,
            Color::Black => &black,
        };

        let Some(mv) = solver.best_move(&board) else {
            break;
        };
        info!(ply = plies + 1, color = %board.turn(), mv = %mv, "move");
        board.perform_move(&mv);
        plies += 1;

        if args.show {
            println!("{}\n", board);
        }
    }

    if !board.is_over() {
        warn!(plies, "ply limit reached before the game ended");
    }

    println!("{}", board);
    println!("{} plies, final position {}", plies, board.to_notation());
    ExitCode::SUCCESS
}
