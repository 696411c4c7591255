//! Depth-limited minimax search.
//!
//! The engine (`Side::Own`) maximizes and the opponent minimizes. Each node
//! first checks for a completed formation, then falls back to the heuristic
//! once the depth limit is reached, and otherwise recurses into the
//! successors of the side to move.
//!
//! There is no pruning: every successor is scored. At the root the last of
//! several equally scored moves is the one returned.

use crate::board::{Board, Move, Side};
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::eval::heuristic;
use crate::movegen::{MoveGen, successors};
use crate::patterns::game_value;

/// Search parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies below the root at which the heuristic replaces recursion.
    pub max_depth: u32,
    /// Move-phase successor policy.
    pub move_gen: MoveGen,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            move_gen: MoveGen::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Best move, or `None` when the engine has no successor.
    pub best: Option<Move>,
    /// Minimax value of `best` (0 when there is none).
    pub score: f64,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Minimax searcher. Holds the configuration and a node counter.
pub struct Searcher {
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Value of `board` with `side` to move, `depth` plies below the root.
    ///
    /// Terminal boards return +1/-1. At the depth limit the heuristic is
    /// framed for `side`. A side with no successors is scored as if the
    /// depth limit had been reached.
    pub fn minimax(&mut self, board: &Board, depth: u32, side: Side) -> f64 {
        self.nodes += 1;

        let value = game_value(board);
        if value != 0 {
            return value as f64;
        }
        if depth >= self.config.max_depth {
            return heuristic(board, side);
        }

        let moves = successors(board, side, self.config.move_gen);
        if moves.is_empty() {
            return heuristic(board, side);
        }

        let scores = moves
            .into_iter()
            .map(|mv| self.minimax(&board.with_move(mv, side), depth + 1, side.opponent()));
        match side {
            Side::Own => scores.fold(f64::NEG_INFINITY, f64::max),
            Side::Opponent => scores.fold(f64::INFINITY, f64::min),
        }
    }

    /// Pick the engine's move on `board`.
    ///
    /// Each candidate is applied and scored one ply down with the opponent to
    /// move. A later candidate replaces the incumbent on an equal score.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut best: Option<(Move, f64)> = None;

        for mv in successors(board, Side::Own, self.config.move_gen) {
            let child = board.with_move(mv, Side::Own);
            let score = self.minimax(&child, 1, Side::Opponent);
            log::debug!("candidate {mv} scored {score:.3}");

            if best.is_none_or(|(_, best_score)| score >= best_score) {
                best = Some((mv, score));
            }
        }

        let result = SearchResult {
            best: best.map(|(mv, _)| mv),
            score: best.map_or(0.0, |(_, score)| score),
            nodes: self.nodes,
        };
        match result.best {
            Some(mv) => log::debug!(
                "best move {mv} score {:.3} after {} nodes",
                result.score,
                result.nodes
            ),
            None => log::debug!("no move available"),
        }
        result
    }
}

/// Best move for the engine on `board` under `config`.
pub fn choose_move(board: &Board, config: &SearchConfig) -> Option<Move> {
    Searcher::new(*config).search(board).best
}
