//! Successor generation for both phases of the game.
//!
//! In the drop phase every empty cell is a candidate. In the move phase the
//! default policy gives each piece a single relocation: the first empty
//! neighbor in [`NEIGHBOR_ORDER`]. [`MoveGen::AllNeighbors`] enumerates every
//! empty neighbor instead.

use crate::board::{Board, Cell, Move, Point, Side, all_points};
use crate::constants::{N, NEIGHBOR_ORDER};

/// Move-phase generation policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MoveGen {
    /// At most one relocation per piece (first empty neighbor in priority order).
    #[default]
    FirstNeighbor,
    /// Every empty neighbor of every piece.
    AllNeighbors,
}

/// Neighbors of `pt` that lie on the board, in priority order.
pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
    NEIGHBOR_ORDER.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < N && c < N).then_some((r, c))
    })
}

/// Candidate moves for `side`, in row-major order of the cell involved.
pub fn successors(board: &Board, side: Side, policy: MoveGen) -> Vec<Move> {
    if !board.is_move_phase() {
        return all_points()
            .filter(|&pt| board.get(pt) == Cell::Empty)
            .map(|to| Move::Drop { to })
            .collect();
    }

    let mut moves = Vec::new();
    for from in all_points().filter(|&pt| board.get(pt) == side.cell()) {
        let mut targets = neighbors(from).filter(|&pt| board.get(pt) == Cell::Empty);
        match policy {
            MoveGen::FirstNeighbor => {
                if let Some(to) = targets.next() {
                    moves.push(Move::Relocate { from, to });
                }
            }
            MoveGen::AllNeighbors => moves.extend(targets.map(|to| Move::Relocate { from, to })),
        }
    }
    moves
}
