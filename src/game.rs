//! Text game loops.
//!
//! [`play`] runs a human-versus-engine game over any line-based reader and
//! writer (stdin/stdout in the binary, in-memory buffers in tests).
//! [`self_play`] pits two engine instances against each other.
//!
//! Coordinates are typed as a column letter and row digit, e.g. `B3`.
//! Malformed input is simply asked for again; illegal moves are reported
//! and the turn is retried.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::board::{Move, Piece, Point, Side, parse_coord, str_coord};
use crate::patterns::{Outcome, outcome, winner};
use crate::player::TeekoPlayer;
use crate::search::SearchConfig;

/// Read one line, failing if the input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line)
}

/// Prompt until a well-formed coordinate is entered.
fn prompt_coord<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<Point> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let line = read_line(input)?;
        match parse_coord(&line) {
            Ok(pt) => return Ok(pt),
            Err(e) => log::debug!("rejected coordinate: {e}"),
        }
    }
}

/// Ask the human for a move in the form the current phase requires.
fn prompt_move<R: BufRead, W: Write>(move_phase: bool, input: &mut R, out: &mut W) -> Result<Move> {
    if move_phase {
        let from = prompt_coord("Move from (e.g. B3): ", input, out)?;
        let to = prompt_coord("Move to (e.g. B3): ", input, out)?;
        Ok(Move::Relocate { from, to })
    } else {
        let to = prompt_coord("Move (e.g. B3): ", input, out)?;
        Ok(Move::Drop { to })
    }
}

/// Write the engine's announcement for a committed move.
fn announce<W: Write>(color: Piece, mv: Move, out: &mut W) -> Result<()> {
    match mv {
        Move::Drop { to } => writeln!(out, "{color} moved at {}", str_coord(to))?,
        Move::Relocate { from, to } => {
            writeln!(out, "{color} moved from {}", str_coord(from))?;
            writeln!(out, "  to {}", str_coord(to))?;
        }
    }
    Ok(())
}

/// Let the engine pick and commit a move. Returns the move, or `None` on a pass.
fn engine_turn<W: Write>(player: &mut TeekoPlayer, out: &mut W) -> Result<Option<Move>> {
    let result = player.search();
    let Some(mv) = result.best else {
        log::warn!("{} has no legal move and passes", player.color());
        writeln!(out, "{} has no move and passes", player.color())?;
        return Ok(None);
    };
    player.place_piece(mv, Side::Own);
    log::info!(
        "{} plays {mv} (score {:.3}, {} nodes)",
        player.color(),
        result.score,
        result.nodes
    );
    announce(player.color(), mv, out)?;
    Ok(Some(mv))
}

/// Read and commit the human's move, retrying until it is legal.
fn human_turn<R: BufRead, W: Write>(
    player: &mut TeekoPlayer,
    input: &mut R,
    out: &mut W,
) -> Result<Move> {
    writeln!(out, "{}'s turn", player.opponent_color())?;
    loop {
        let mv = prompt_move(player.is_move_phase(), input, out)?;
        match player.opponent_move(mv) {
            Ok(()) => {
                log::info!("{} plays {mv}", player.opponent_color());
                return Ok(mv);
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Play a full game between `player` and a human on `input`/`out`.
///
/// Black moves first. Drops continue until all eight pieces are placed,
/// then pieces are moved until someone completes a formation.
///
/// # Errors
/// Fails if the input ends before the game does or the output cannot be written.
pub fn play<R: BufRead, W: Write>(
    player: &mut TeekoPlayer,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    writeln!(
        out,
        "Teeko: the engine plays {}, you play {}",
        player.color(),
        player.opponent_color()
    )?;

    let mut turn = Piece::Black;
    while outcome(player.board()) == Outcome::Undecided {
        write!(out, "{}", player.render())?;
        if turn == player.color() {
            engine_turn(player, out)?;
        } else {
            human_turn(player, input, out)?;
        }
        turn = turn.other();
    }

    write!(out, "{}", player.render())?;
    let result = outcome(player.board());
    match result {
        Outcome::EngineWin => writeln!(out, "AI wins! Game over.")?,
        _ => writeln!(out, "You win! Game over.")?,
    }
    Ok(result)
}

/// Result of an engine-versus-engine game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayReport {
    /// Winning color, or `None` if the ply limit was reached.
    pub winner: Option<Piece>,
    /// Plies played, passes included.
    pub plies: usize,
    /// Moves in order, `None` for a pass.
    pub moves: Vec<Option<Move>>,
}

/// Play two engines against each other for at most `max_plies` plies.
///
/// Each engine keeps its own board and learns the other's moves through
/// [`TeekoPlayer::opponent_move`].
///
/// # Errors
/// Fails if an engine produces a move its opponent rejects, or on write failure.
pub fn self_play<W: Write>(
    black: SearchConfig,
    red: SearchConfig,
    max_plies: usize,
    out: &mut W,
) -> Result<SelfPlayReport> {
    let mut players = [
        TeekoPlayer::with_color(Piece::Black, black),
        TeekoPlayer::with_color(Piece::Red, red),
    ];
    let mut moves = Vec::new();

    for ply in 1..=max_plies {
        let (mover, other) = if ply % 2 == 1 { (0, 1) } else { (1, 0) };
        write!(out, "{ply}. ")?;
        let mv = engine_turn(&mut players[mover], out)?;
        if let Some(mv) = mv {
            players[other]
                .opponent_move(mv)
                .with_context(|| format!("{} rejected {mv}", players[other].color()))?;
        }
        moves.push(mv);

        if let Some(side) = winner(players[0].board()) {
            let color = match side {
                Side::Own => Piece::Black,
                Side::Opponent => Piece::Red,
            };
            write!(out, "{}", players[0].render())?;
            writeln!(out, "{color} wins after {ply} plies")?;
            return Ok(SelfPlayReport {
                winner: Some(color),
                plies: ply,
                moves,
            });
        }
    }

    write!(out, "{}", players[0].render())?;
    writeln!(out, "draw: no winner after {max_plies} plies")?;
    Ok(SelfPlayReport {
        winner: None,
        plies: max_plies,
        moves,
    })
}
