//! Integration tests for the Teeko engine.
//!
//! These exercise the public API end to end: terminal detection, successor
//! generation in both phases, the heuristic, root move selection and the
//! two game loops.

use std::io::Cursor;

use teeko::board::{Board, Cell, Move, Piece, Point, Side, all_points, is_adjacent};
use teeko::constants::{N, NEIGHBOR_ORDER, PIECES_PER_SIDE, TOTAL_PIECES};
use teeko::eval::heuristic;
use teeko::game::{play, self_play};
use teeko::movegen::{MoveGen, neighbors, successors};
use teeko::patterns::{Outcome, game_value};
use teeko::player::TeekoPlayer;
use teeko::search::{SearchConfig, Searcher, choose_move};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).expect("valid test board")
}

/// Drop `own` and `opponent` pieces on distinct random cells.
fn random_board(rng: &mut fastrand::Rng, own: usize, opponent: usize) -> Board {
    let mut cells: Vec<Point> = all_points().collect();
    rng.shuffle(&mut cells);
    let mut b = Board::new();
    for &pt in &cells[..own] {
        b.set(pt, Cell::Own);
    }
    for &pt in &cells[own..own + opponent] {
        b.set(pt, Cell::Opponent);
    }
    b
}

/// A random legal drop-phase board (Black moved first, counts differ by at most one).
fn random_drop_phase(rng: &mut fastrand::Rng) -> Board {
    let placed = rng.usize(0..TOTAL_PIECES);
    random_board(rng, placed.div_ceil(2), placed / 2)
}

fn random_move_phase(rng: &mut fastrand::Rng) -> Board {
    random_board(rng, PIECES_PER_SIDE, PIECES_PER_SIDE)
}

/// Score used at the root when the search has no lookahead.
fn immediate_score(b: &Board) -> f64 {
    match game_value(b) {
        0 => heuristic(b, Side::Opponent),
        v => v as f64,
    }
}

// =============================================================================
// Terminal evaluation
// =============================================================================

#[test]
fn test_row_win_detected() {
    let b = board(&["XXXX.", ".....", ".....", ".....", "....."]);
    assert_eq!(game_value(&b), 1);
}

#[test]
fn test_box_win_detected() {
    let b = board(&[".....", ".OO..", ".OO..", ".....", "....."]);
    assert_eq!(game_value(&b), -1);
}

#[test]
fn test_game_value_symmetry() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..500 {
        let own = rng.usize(0..=6);
        let opponent = rng.usize(0..=6);
        let b = random_board(&mut rng, own, opponent);
        assert_eq!(
            game_value(&b.swapped()),
            -game_value(&b),
            "symmetry broken on\n{b}"
        );
    }
}

#[test]
fn test_every_formation_wins_for_both_sides() {
    for w in teeko::patterns::winning_windows() {
        let mut b = Board::new();
        for pt in w {
            b.set(pt, Cell::Own);
        }
        assert_eq!(game_value(&b), 1, "{w:?}");
        assert_eq!(game_value(&b.swapped()), -1, "{w:?}");
    }
}

// =============================================================================
// Heuristic
// =============================================================================

#[test]
fn test_empty_board_heuristic_is_zero() {
    assert_eq!(heuristic(&Board::new(), Side::Own), 0.0);
    assert_eq!(heuristic(&Board::new(), Side::Opponent), 0.0);
}

#[test]
fn test_heuristic_in_range() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..200 {
        let b = random_move_phase(&mut rng);
        for side in [Side::Own, Side::Opponent] {
            let h = heuristic(&b, side);
            assert!((-1.0..=1.0).contains(&h));
        }
    }
}

// =============================================================================
// Successor generation
// =============================================================================

#[test]
fn test_drop_phase_completeness() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..200 {
        let b = random_drop_phase(&mut rng);
        assert!(!b.is_move_phase());
        for side in [Side::Own, Side::Opponent] {
            let moves = successors(&b, side, MoveGen::FirstNeighbor);
            assert_eq!(moves.len(), N * N - b.piece_count());
            for mv in moves {
                assert!(matches!(mv, Move::Drop { .. }));
                assert_eq!(b.get(mv.target()), Cell::Empty);
            }
        }
    }
}

#[test]
fn test_move_phase_first_neighbor_bound() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..200 {
        let b = random_move_phase(&mut rng);
        for side in [Side::Own, Side::Opponent] {
            let moves = successors(&b, side, MoveGen::FirstNeighbor);
            let mobile = all_points()
                .filter(|&pt| b.get(pt) == side.cell())
                .filter(|&pt| neighbors(pt).any(|n| b.get(n) == Cell::Empty))
                .count();
            assert_eq!(moves.len(), mobile);

            for mv in moves {
                let Move::Relocate { from, to } = mv else {
                    panic!("drop generated in move phase: {mv}");
                };
                assert_eq!(b.get(from), side.cell());
                let first_empty = neighbors(from).find(|&n| b.get(n) == Cell::Empty);
                assert_eq!(Some(to), first_empty);
            }
        }
    }
}

#[test]
fn test_neighbor_order_is_the_documented_priority() {
    assert_eq!(NEIGHBOR_ORDER[0], (0, 1));
    assert_eq!(NEIGHBOR_ORDER[1], (1, 0));
    assert_eq!(NEIGHBOR_ORDER[7], (1, 1));
}

#[test]
fn test_all_neighbors_moves_are_legal() {
    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..100 {
        let b = random_move_phase(&mut rng);
        for mv in successors(&b, Side::Own, MoveGen::AllNeighbors) {
            assert_eq!(b.validate(mv, Side::Own), Ok(()));
            let from = mv.source().unwrap();
            assert!(is_adjacent(from, mv.target()));
        }
    }
}

// =============================================================================
// Move selection
// =============================================================================

#[test]
fn test_depth_zero_picks_best_immediate_score() {
    let mut rng = fastrand::Rng::with_seed(21);
    let config = SearchConfig::with_depth(0);
    for _ in 0..50 {
        let b = if rng.bool() {
            random_drop_phase(&mut rng)
        } else {
            random_move_phase(&mut rng)
        };
        if game_value(&b) != 0 {
            continue;
        }

        let mut expected: Option<(Move, f64)> = None;
        for mv in successors(&b, Side::Own, config.move_gen) {
            let score = immediate_score(&b.with_move(mv, Side::Own));
            if expected.is_none_or(|(_, best)| score >= best) {
                expected = Some((mv, score));
            }
        }
        assert_eq!(choose_move(&b, &config), expected.map(|(mv, _)| mv), "on\n{b}");
    }
}

#[test]
fn test_tie_break_returns_last_candidate() {
    // At one ply every drop on the empty board scores the same, so the last
    // cell in row-major order wins the tie.
    let mv = choose_move(&Board::new(), &SearchConfig::with_depth(1));
    assert_eq!(mv, Some(Move::Drop { to: (N - 1, N - 1) }));
}

#[test]
fn test_tie_break_on_partial_board() {
    let b = board(&["X....", ".....", ".....", ".....", "....O"]);
    let config = SearchConfig::with_depth(1);
    let scores: Vec<(Move, f64)> = successors(&b, Side::Own, config.move_gen)
        .into_iter()
        .map(|mv| (mv, immediate_score(&b.with_move(mv, Side::Own))))
        .collect();
    let best = scores.iter().map(|&(_, s)| s).fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<Move> = scores
        .iter()
        .filter(|&&(_, s)| s == best)
        .map(|&(mv, _)| mv)
        .collect();
    assert!(tied.len() >= 2, "expected a tie among several drops");
    assert_eq!(choose_move(&b, &config), tied.last().copied());
}

#[test]
fn test_empty_board_end_to_end() {
    let b = Board::new();
    let mv = choose_move(&b, &SearchConfig::default()).expect("a drop is always available");
    let Move::Drop { to: (row, col) } = mv else {
        panic!("expected a drop, got {mv}");
    };
    assert!(row < N && col < N);
    assert_eq!(b.get((row, col)), Cell::Empty);
}

#[test]
fn test_search_is_deterministic() {
    let b = board(&["X....", ".O...", "..X..", ".....", "....O"]);
    let mut a = Searcher::new(SearchConfig::default());
    let mut c = Searcher::new(SearchConfig::default());
    assert_eq!(a.search(&b), c.search(&b));
}

#[test]
fn test_deeper_search_visits_more_nodes() {
    let b = board(&["XX...", "OO...", ".....", ".....", "....."]);
    let shallow = Searcher::new(SearchConfig::with_depth(1)).search(&b);
    let deep = Searcher::new(SearchConfig::with_depth(2)).search(&b);
    assert!(deep.nodes > shallow.nodes);
}

#[test]
fn test_move_phase_engine_wins_by_relocation() {
    // B1 is hemmed in on three sides, so its only slide is up to B0,
    // completing the top row.
    let b = board(&["X.XX.", "OXO..", ".O...", ".....", "....O"]);
    assert!(b.is_move_phase());
    let mv = choose_move(&b, &SearchConfig::default()).unwrap();
    assert_eq!(game_value(&b.with_move(mv, Side::Own)), 1, "got {mv}");
}

// =============================================================================
// Game loops
// =============================================================================

#[test]
fn test_play_engine_wins_immediately() {
    let mut player = TeekoPlayer::with_color(Piece::Black, SearchConfig::default());
    for pt in [(0, 0), (0, 1), (0, 2)] {
        player.place_piece(Move::Drop { to: pt }, Side::Own);
    }
    for pt in [(4, 0), (4, 2), (2, 4)] {
        player.place_piece(Move::Drop { to: pt }, Side::Opponent);
    }

    let mut out = Vec::new();
    let result = play(&mut player, &mut Cursor::new(""), &mut out).unwrap();
    assert_eq!(result, Outcome::EngineWin);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("b moved at D0"), "{text}");
    assert!(text.ends_with("AI wins! Game over.\n"));
}

#[test]
fn test_play_human_wins_in_drop_phase() {
    let mut player = TeekoPlayer::with_color(Piece::Red, SearchConfig::default());
    for pt in [(0, 0), (0, 1), (0, 2)] {
        player.place_piece(Move::Drop { to: pt }, Side::Opponent);
    }
    for pt in [(4, 0), (4, 2), (2, 4)] {
        player.place_piece(Move::Drop { to: pt }, Side::Own);
    }

    let mut out = Vec::new();
    let result = play(&mut player, &mut Cursor::new("D0\n"), &mut out).unwrap();
    assert_eq!(result, Outcome::OpponentWin);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("b's turn"));
    assert!(text.ends_with("You win! Game over.\n"));
}

#[test]
fn test_play_move_phase_rejects_then_accepts() {
    let mut player = TeekoPlayer::with_color(Piece::Red, SearchConfig::default());
    for pt in [(0, 0), (0, 1), (0, 2), (1, 4)] {
        player.place_piece(Move::Drop { to: pt }, Side::Opponent);
    }
    for pt in [(2, 0), (2, 2), (3, 3), (4, 4)] {
        player.place_piece(Move::Drop { to: pt }, Side::Own);
    }
    assert!(player.is_move_phase());

    // C2 is the engine's piece; then E1 -> D0 completes the top row.
    let mut input = Cursor::new("C2\nB1\nE1\nD0\n");
    let mut out = Vec::new();
    let result = play(&mut player, &mut input, &mut out).unwrap();
    assert_eq!(result, Outcome::OpponentWin);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("You don't have a piece at C2"), "{text}");
    assert!(text.contains("Move from (e.g. B3): "));
    assert!(text.contains("Move to (e.g. B3): "));
}

#[test]
fn test_play_fails_when_input_ends() {
    let mut player = TeekoPlayer::with_color(Piece::Red, SearchConfig::with_depth(1));
    let mut out = Vec::new();
    assert!(play(&mut player, &mut Cursor::new(""), &mut out).is_err());
}

#[test]
fn test_self_play_completes() {
    let mut out = Vec::new();
    let report = self_play(
        SearchConfig::default(),
        SearchConfig::with_depth(1),
        60,
        &mut out,
    )
    .unwrap();
    assert!(report.plies <= 60);
    assert_eq!(report.moves.len(), report.plies);

    // Replay the game on a fresh board and check each move was legal.
    let mut b = Board::new();
    let mut side = Side::Own;
    for mv in &report.moves {
        if let Some(mv) = *mv {
            assert_eq!(b.validate(mv, side), Ok(()), "{mv} on\n{b}");
            b.apply(mv, side);
        }
        side = side.opponent();
    }
    match report.winner {
        Some(Piece::Black) => assert_eq!(game_value(&b), 1),
        Some(Piece::Red) => assert_eq!(game_value(&b), -1),
        None => assert_eq!(report.plies, 60),
    }
}
