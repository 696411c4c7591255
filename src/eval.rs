//! Static evaluation of undecided positions.
//!
//! The heuristic looks at the same formation families as the terminal check
//! and asks how far each side has got in its best one. Rows and columns are
//! counted over their full five cells; diagonals and boxes over their four.

use crate::board::{Board, Cell, Point, Side};
use crate::constants::{HEURISTIC_SCALE, N};
use crate::patterns::{boxes, diagonal_down, diagonal_up};

/// Highest piece counts seen for each side across all formations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub own: usize,
    pub opponent: usize,
}

impl Progress {
    fn observe(&mut self, board: &Board, cells: impl IntoIterator<Item = Point>) {
        let (mut own, mut opponent) = (0, 0);
        for pt in cells {
            match board.get(pt) {
                Cell::Own => own += 1,
                Cell::Opponent => opponent += 1,
                Cell::Empty => {}
            }
        }
        self.own = self.own.max(own);
        self.opponent = self.opponent.max(opponent);
    }
}

/// Best per-side counts over rows, columns, both diagonals and boxes.
///
/// The two maxima are tracked independently and may come from different formations.
pub fn progress(board: &Board) -> Progress {
    let mut p = Progress::default();
    for row in 0..N {
        p.observe(board, (0..N).map(|col| (row, col)));
    }
    for col in 0..N {
        p.observe(board, (0..N).map(|row| (row, col)));
    }
    for w in diagonal_up().chain(diagonal_down()).chain(boxes()) {
        p.observe(board, w);
    }
    p
}

/// Heuristic value in [-1, 1] of an undecided board, framed for `side`.
///
/// The side that is ahead scores its best count over five. From the engine's
/// perspective a lead by the opponent is negative; from the opponent's
/// perspective the signs flip. So the value is not antisymmetric in `side`.
pub fn heuristic(board: &Board, side: Side) -> f64 {
    let Progress { own, opponent } = progress(board);
    if own == opponent {
        return 0.0;
    }
    let (mine, theirs) = match side {
        Side::Own => (own, opponent),
        Side::Opponent => (opponent, own),
    };
    if mine > theirs {
        mine as f64 / HEURISTIC_SCALE
    } else {
        -(theirs as f64) / HEURISTIC_SCALE
    }
}
