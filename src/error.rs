//! Errors raised at the boundary where externally supplied moves enter the game.
//!
//! The search itself has no error paths; these are only produced when a move
//! typed by a human (or handed over by another engine) is checked before it
//! is committed to a board.

use crate::board::{Point, str_coord};

fn coord(pt: &Point) -> String {
    str_coord(*pt)
}

/// Reasons an opponent's move can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Illegal move: {} is not empty", coord(.0))]
    Occupied(Point),

    #[error("You don't have a piece at {}", coord(.0))]
    NotYourPiece(Point),

    #[error("Illegal move: can only move from {} to an adjacent space, not {}", coord(.from), coord(.to))]
    NotAdjacent { from: Point, to: Point },

    #[error("Illegal move: {0}")]
    WrongPhase(&'static str),
}

/// Errors from parsing a text coordinate such as `B3`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("expected a column letter and a row digit (e.g. B3), got {0:?}")]
    Malformed(String),

    #[error("column {0:?} is not in A-E")]
    BadColumn(char),

    #[error("row {0:?} is not in 0-4")]
    BadRow(char),
}
