//! Constants for board geometry and engine defaults.
//!
//! Teeko is played on a fixed 5x5 board with four pieces per side, so
//! unlike a Go engine there is nothing to select at compile time.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Pieces each side drops before the move phase begins.
pub const PIECES_PER_SIDE: usize = 4;

/// Total pieces on the board once both sides have dropped everything.
pub const TOTAL_PIECES: usize = PIECES_PER_SIDE * 2;

/// Cells in a winning formation (line or 2x2 box).
pub const WIN_LEN: usize = 4;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax depth, in plies below the root.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Divisor that maps a pattern count onto the heuristic range [-1, 1].
pub const HEURISTIC_SCALE: f64 = 5.0;

/// Ply limit for engine-vs-engine games, which can otherwise shuffle forever.
pub const SELFPLAY_MAX_PLIES: usize = 200;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets (drow, dcol) to the eight neighbors of a cell, in the priority
/// order used by move-phase successor generation.
/// Order: E, S, W, N, NW, NE, SW, SE
pub const NEIGHBOR_ORDER: [(isize, isize); 8] = [
    (0, 1),   // East
    (1, 0),   // South
    (0, -1),  // West
    (-1, 0),  // North
    (-1, -1), // NW
    (-1, 1),  // NE
    (1, -1),  // SW
    (1, 1),   // SE
];

// =============================================================================
// Piece Symbols
// =============================================================================

/// Black piece (moves first).
pub const PIECE_BLACK: char = 'b';

/// Red piece.
pub const PIECE_RED: char = 'r';

/// Empty cell.
pub const EMPTY: char = ' ';
