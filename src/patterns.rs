//! Winning formations and terminal detection.
//!
//! A side wins with four pieces in a row, column, or diagonal, or with four
//! pieces filling a 2x2 box. Each formation is a "window" of four cells;
//! the families are scanned in a fixed order and the first complete window
//! decides the game.

use crate::board::{Board, Cell, Point, Side};
use crate::constants::{N, WIN_LEN};

/// Four cells that form a winning pattern when held by one side.
pub type Window = [Point; WIN_LEN];

/// Number of starting offsets for a four-cell line on an N-cell edge.
const LINE_STARTS: usize = N - WIN_LEN + 1;

/// Result of scanning a board for a completed formation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    EngineWin,
    OpponentWin,
    Undecided,
}

impl Outcome {
    /// +1 for an engine win, -1 for an opponent win, 0 otherwise.
    pub fn value(self) -> i32 {
        match self {
            Outcome::EngineWin => 1,
            Outcome::OpponentWin => -1,
            Outcome::Undecided => 0,
        }
    }
}

/// Four cells starting at `start`, stepping by `(drow, dcol)`.
fn line((row, col): Point, (dr, dc): (isize, isize)) -> Window {
    std::array::from_fn(|k| {
        let k = k as isize;
        (row.wrapping_add_signed(dr * k), col.wrapping_add_signed(dc * k))
    })
}

/// Horizontal lines: every row, starting columns 0..LINE_STARTS.
pub fn horizontal() -> impl Iterator<Item = Window> {
    (0..N).flat_map(|row| (0..LINE_STARTS).map(move |col| line((row, col), (0, 1))))
}

/// Vertical lines: every column, starting rows 0..LINE_STARTS.
pub fn vertical() -> impl Iterator<Item = Window> {
    (0..N).flat_map(|col| (0..LINE_STARTS).map(move |row| line((row, col), (1, 0))))
}

/// Down-right diagonals (`\`).
pub fn diagonal_down() -> impl Iterator<Item = Window> {
    (0..LINE_STARTS).flat_map(|row| {
        (0..LINE_STARTS).map(move |col| line((row, col), (1, 1)))
    })
}

/// Up-right diagonals (`/`), anchored at their bottom-left cell.
pub fn diagonal_up() -> impl Iterator<Item = Window> {
    (WIN_LEN - 1..N).flat_map(|row| {
        (0..LINE_STARTS).map(move |col| line((row, col), (-1, 1)))
    })
}

/// 2x2 boxes, anchored at their top-left cell.
pub fn boxes() -> impl Iterator<Item = Window> {
    (0..N - 1).flat_map(|row| {
        (0..N - 1).map(move |col| [(row, col), (row, col + 1), (row + 1, col), (row + 1, col + 1)])
    })
}

/// Every winning window, in scan order.
pub fn winning_windows() -> impl Iterator<Item = Window> {
    horizontal()
        .chain(vertical())
        .chain(diagonal_down())
        .chain(diagonal_up())
        .chain(boxes())
}

/// The side holding every cell of `window`, if any.
fn owner(board: &Board, window: &Window) -> Option<Side> {
    let first = board.get(window[0]);
    if first == Cell::Empty || window[1..].iter().any(|&pt| board.get(pt) != first) {
        return None;
    }
    match first {
        Cell::Own => Some(Side::Own),
        Cell::Opponent => Some(Side::Opponent),
        Cell::Empty => None,
    }
}

/// The side that has completed a formation, if any.
pub fn winner(board: &Board) -> Option<Side> {
    winning_windows().find_map(|w| owner(board, &w))
}

pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Side::Own) => Outcome::EngineWin,
        Some(Side::Opponent) => Outcome::OpponentWin,
        None => Outcome::Undecided,
    }
}

/// Terminal value from the engine's point of view: +1, -1 or 0.
pub fn game_value(board: &Board) -> i32 {
    outcome(board).value()
}
