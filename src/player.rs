//! An engine instance playing one color of a Teeko game.
//!
//! Each player owns its board; two players in the same process never share
//! state. The player's own moves are committed with [`TeekoPlayer::place_piece`],
//! while moves coming from outside go through [`TeekoPlayer::opponent_move`],
//! which validates them first.

use crate::board::{Board, Move, Piece, Side};
use crate::error::MoveError;
use crate::patterns::game_value;
use crate::search::{SearchConfig, SearchResult, Searcher};

pub struct TeekoPlayer {
    board: Board,
    color: Piece,
    config: SearchConfig,
}

impl TeekoPlayer {
    /// Create a player with a randomly chosen color.
    pub fn new(config: SearchConfig, rng: &mut fastrand::Rng) -> Self {
        Self::with_color(Piece::random(rng), config)
    }

    pub fn with_color(color: Piece, config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            color,
            config,
        }
    }

    pub fn color(&self) -> Piece {
        self.color
    }

    pub fn opponent_color(&self) -> Piece {
        self.color.other()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search the current board. Does not commit the move.
    pub fn search(&self) -> SearchResult {
        Searcher::new(self.config).search(&self.board)
    }

    /// The move this player would make now, if it has one.
    pub fn make_move(&self) -> Option<Move> {
        self.search().best
    }

    /// Commit `mv` for `side` without validation.
    pub fn place_piece(&mut self, mv: Move, side: Side) {
        self.board.apply(mv, side);
    }

    /// Validate and commit a move played by the opponent.
    ///
    /// # Errors
    /// Returns the first [`MoveError`] found; the board is left unchanged.
    pub fn opponent_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board.validate(mv, Side::Opponent)?;
        self.place_piece(mv, Side::Opponent);
        Ok(())
    }

    /// +1 if this player has won, -1 if the opponent has, 0 otherwise.
    pub fn game_value(&self) -> i32 {
        game_value(&self.board)
    }

    pub fn is_move_phase(&self) -> bool {
        self.board.is_move_phase()
    }

    /// Side whose turn it is for a given piece color.
    pub fn side_of(&self, color: Piece) -> Side {
        if color == self.color { Side::Own } else { Side::Opponent }
    }

    /// Board rendered with this player's color letters.
    pub fn render(&self) -> String {
        self.board.render(self.color)
    }
}
