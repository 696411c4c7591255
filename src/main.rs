//! Teeko: play against a minimax engine in the terminal.
//!
//! ## Usage
//!
//! - `teeko` / `teeko play` - Play a game against the engine on stdin/stdout
//! - `teeko selfplay` - Watch two engines play each other
//!
//! Set `RUST_LOG=debug` to see the search's candidate scores.

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use teeko::board::Piece;
use teeko::constants::{DEFAULT_MAX_DEPTH, SELFPLAY_MAX_PLIES};
use teeko::game::{play, self_play};
use teeko::movegen::MoveGen;
use teeko::player::TeekoPlayer;
use teeko::search::SearchConfig;

/// Teeko: a two-phase 5x5 strategy game with a minimax engine
#[derive(Parser)]
#[command(name = "teeko")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play {
        #[command(flatten)]
        search: SearchArgs,
        /// Color the engine plays (random when omitted)
        #[arg(long, value_enum)]
        color: Option<ColorArg>,
        /// Seed for the random color choice
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two engines play each other
    Selfplay {
        #[command(flatten)]
        search: SearchArgs,
        /// Stop and call a draw after this many plies
        #[arg(long, default_value_t = SELFPLAY_MAX_PLIES)]
        max_plies: usize,
    },
}

#[derive(Args, Clone, Copy)]
struct SearchArgs {
    /// Search depth in plies below the root
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,
    /// In the move phase, consider every empty neighbor of each piece
    #[arg(long)]
    all_neighbors: bool,
}

impl From<SearchArgs> for SearchConfig {
    fn from(args: SearchArgs) -> Self {
        SearchConfig {
            max_depth: args.depth,
            move_gen: if args.all_neighbors {
                MoveGen::AllNeighbors
            } else {
                MoveGen::FirstNeighbor
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    Red,
}

impl From<ColorArg> for Piece {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Black => Piece::Black,
            ColorArg::Red => Piece::Red,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            search,
            color,
            seed,
        }) => run_play(search.into(), color.map(Piece::from), seed),
        Some(Commands::Selfplay { search, max_plies }) => {
            let config = SearchConfig::from(search);
            let mut stdout = io::stdout().lock();
            self_play(config, config, max_plies, &mut stdout)?;
            Ok(())
        }
        None => run_play(SearchConfig::default(), None, None),
    }
}

fn run_play(config: SearchConfig, color: Option<Piece>, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut player = match color {
        Some(color) => TeekoPlayer::with_color(color, config),
        None => TeekoPlayer::new(config, &mut rng),
    };
    log::info!(
        "engine plays {} at depth {}",
        player.color(),
        config.max_depth
    );

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    play(&mut player, &mut stdin, &mut stdout)?;
    Ok(())
}
