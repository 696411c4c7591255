//! Teeko board state, moves, and coordinates.
//!
//! Cells are stored from the engine's point of view: `Own` pieces belong to
//! the engine, `Opponent` pieces to the other side. The physical colors
//! (black and red) only matter for turn order and rendering, so they live on
//! the player rather than on the board.

use std::fmt;

use crate::constants::{EMPTY, N, PIECE_BLACK, PIECE_RED, PIECES_PER_SIDE};
use crate::error::{CoordError, MoveError};

/// A cell on the board, as (row, col).
pub type Point = (usize, usize);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Own,
    Opponent,
}

/// One of the two sides, relative to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Own,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }

    /// The cell value occupied by this side's pieces.
    pub fn cell(self) -> Cell {
        match self {
            Side::Own => Cell::Own,
            Side::Opponent => Cell::Opponent,
        }
    }
}

/// Physical piece color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Black,
    Red,
}

impl Piece {
    pub fn other(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Black => PIECE_BLACK,
            Piece::Red => PIECE_RED,
        }
    }

    /// Pick a color uniformly at random.
    pub fn random(rng: &mut fastrand::Rng) -> Piece {
        if rng.bool() { Piece::Black } else { Piece::Red }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A move: either dropping a new piece or relocating an existing one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Drop { to: Point },
    Relocate { from: Point, to: Point },
}

impl Move {
    /// The cell that receives the piece.
    pub fn target(self) -> Point {
        match self {
            Move::Drop { to } | Move::Relocate { to, .. } => to,
        }
    }

    /// The cell that is vacated, for relocations.
    pub fn source(self) -> Option<Point> {
        match self {
            Move::Drop { .. } => None,
            Move::Relocate { from, .. } => Some(from),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Drop { to } => write!(f, "{}", str_coord(to)),
            Move::Relocate { from, to } => write!(f, "{}-{}", str_coord(from), str_coord(to)),
        }
    }
}

/// True if `a` and `b` are distinct cells touching orthogonally or diagonally.
pub fn is_adjacent(a: Point, b: Point) -> bool {
    a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// Iterate over every cell in row-major order.
pub fn all_points() -> impl Iterator<Item = Point> {
    (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
}

/// A 5x5 Teeko board.
///
/// `Board` is `Copy`: the search hands every node its own snapshot instead
/// of mutating and undoing a shared grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from row strings: `X` = own, `O` = opponent, `.` = empty.
    ///
    /// Returns `None` unless there are exactly N rows of N recognised characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != N {
            return None;
        }
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != N {
                return None;
            }
            for (col, ch) in chars.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    'X' | 'x' => Cell::Own,
                    'O' | 'o' => Cell::Opponent,
                    '.' => Cell::Empty,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    pub fn get(&self, (row, col): Point) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, (row, col): Point, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of pieces of either side on the board.
    pub fn piece_count(&self) -> usize {
        N * N - self.count(Cell::Empty)
    }

    /// True once both sides have all their pieces on the board.
    ///
    /// Always recomputed from the cell counts; successors of a drop-phase
    /// board may already be in the move phase.
    pub fn is_move_phase(&self) -> bool {
        self.count(Cell::Own) >= PIECES_PER_SIDE && self.count(Cell::Opponent) >= PIECES_PER_SIDE
    }

    /// Commit a move for `side` without any legality checks.
    pub fn apply(&mut self, mv: Move, side: Side) {
        if let Some(from) = mv.source() {
            self.set(from, Cell::Empty);
        }
        self.set(mv.target(), side.cell());
    }

    /// Copy of this board with `mv` applied for `side`.
    pub fn with_move(&self, mv: Move, side: Side) -> Board {
        let mut next = *self;
        next.apply(mv, side);
        next
    }

    /// Swap own and opponent pieces (the same position seen from the other side).
    pub fn swapped(&self) -> Board {
        let mut board = *self;
        for c in board.cells.iter_mut().flatten() {
            *c = match *c {
                Cell::Own => Cell::Opponent,
                Cell::Opponent => Cell::Own,
                Cell::Empty => Cell::Empty,
            };
        }
        board
    }

    /// Check that `side` may play `mv` on this board.
    ///
    /// # Errors
    /// - [`MoveError::WrongPhase`] if the move kind does not match the phase
    /// - [`MoveError::NotYourPiece`] if the relocation source is not `side`'s piece
    /// - [`MoveError::NotAdjacent`] if source and target do not touch
    /// - [`MoveError::Occupied`] if the target is not empty
    pub fn validate(&self, mv: Move, side: Side) -> Result<(), MoveError> {
        match mv {
            Move::Drop { .. } if self.is_move_phase() => {
                return Err(MoveError::WrongPhase("all pieces are placed, move one instead"));
            }
            Move::Relocate { .. } if !self.is_move_phase() => {
                return Err(MoveError::WrongPhase("pieces can only be dropped until all are placed"));
            }
            Move::Relocate { from, to } => {
                if self.get(from) != side.cell() {
                    return Err(MoveError::NotYourPiece(from));
                }
                if !is_adjacent(from, to) {
                    return Err(MoveError::NotAdjacent { from, to });
                }
            }
            Move::Drop { .. } => {}
        }
        if self.get(mv.target()) != Cell::Empty {
            return Err(MoveError::Occupied(mv.target()));
        }
        Ok(())
    }

    /// Render the board with piece letters, `own` being the engine's color.
    ///
    /// ```text
    /// 0: b
    /// ...
    ///    A B C D E
    /// ```
    pub fn render(&self, own: Piece) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{row}: "));
            for &c in cells {
                out.push(match c {
                    Cell::Own => own.symbol(),
                    Cell::Opponent => own.other().symbol(),
                    Cell::Empty => EMPTY,
                });
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("   A B C D E\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for &c in cells {
                let ch = match c {
                    Cell::Own => 'X',
                    Cell::Opponent => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate such as `B3` (column letter, row digit) into a Point.
///
/// Surrounding whitespace is ignored and the column letter is case-insensitive.
pub fn parse_coord(s: &str) -> Result<Point, CoordError> {
    let mut chars = s.trim().chars();
    let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordError::Malformed(s.trim().to_string()));
    };

    let col_char = c.to_ascii_uppercase();
    if !('A'..='E').contains(&col_char) {
        return Err(CoordError::BadColumn(c));
    }
    let row = match r.to_digit(10) {
        Some(d) if (d as usize) < N => d as usize,
        _ => return Err(CoordError::BadRow(r)),
    };

    Ok((row, (col_char as u8 - b'A') as usize))
}

/// Convert a Point to a coordinate string (e.g. `B3`).
pub fn str_coord((row, col): Point) -> String {
    format!("{}{row}", (b'A' + col as u8) as char)
}
