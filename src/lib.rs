//! Teeko: a minimax player for the two-phase 5x5 strategy game.
//!
//! Each side first drops four pieces onto empty cells, then moves one piece
//! per turn to an adjacent empty cell. Four in a row, column, or diagonal,
//! or four in a 2x2 box, wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine defaults
//! - [`board`] - Board state, moves, coordinates
//! - [`movegen`] - Successor generation for both phases
//! - [`patterns`] - Winning formations and terminal detection
//! - [`eval`] - Heuristic evaluation of undecided boards
//! - [`search`] - Depth-limited minimax and root move selection
//! - [`player`] - An engine instance owning its board and color
//! - [`game`] - Human-vs-engine and engine-vs-engine game loops
//! - [`error`] - Move validation and coordinate errors
//!
//! ## Example
//!
//! ```
//! use teeko::board::{Board, Side, str_coord};
//! use teeko::search::{SearchConfig, choose_move};
//!
//! let board = Board::new();
//! let mv = choose_move(&board, &SearchConfig::with_depth(1)).unwrap();
//! let next = board.with_move(mv, Side::Own);
//! println!("engine drops at {}", str_coord(mv.target()));
//! assert_eq!(next.piece_count(), 1);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod patterns;
pub mod player;
pub mod search;
