//! Rookie-Chess: play chess against a small minimax engine.
//!
//! ## Usage
//!
//! - `rookie-chess` - Show a demo
//! - `rookie-chess play` - Start the text protocol for a game on stdin/stdout
//! - `rookie-chess bestmove --fen <fen>` - Print the engine's move for a position
//! - `rookie-chess bench` - Compare pruned and unpruned search node counts
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rookie_chess::constants::SEARCH_BOUND;
use rookie_chess::difficulty::Difficulty;
use rookie_chess::position::Game;
use rookie_chess::protocol::Session;
use rookie_chess::rules::{Rules, Side};
use rookie_chess::search::{minimax, search_with_stats, SearchStats};
use rookie_chess::selector::Opponent;

/// Rookie-Chess: a small minimax chess opponent
#[derive(Parser)]
#[command(name = "rookie-chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game through the line-based text protocol
    Play {
        #[command(flatten)]
        engine: EngineArgs,
        /// Do not answer automatically after each move
        #[arg(long)]
        no_auto: bool,
    },
    /// Print the engine's move for a position
    Bestmove {
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Count nodes searched with and without pruning
    Bench {
        /// Starting position in FEN (defaults to the standard start)
        #[arg(long)]
        fen: Option<String>,
        /// Deepest depth to measure
        #[arg(long, default_value_t = 3)]
        depth: u32,
    },
    /// Run a short self-play demo
    Demo,
}

#[derive(Args)]
struct EngineArgs {
    /// easy, medium or hard; anything else means medium
    #[arg(short, long, default_value = "medium")]
    difficulty: String,
    /// Seed for the move shuffle, for reproducible play
    #[arg(short, long)]
    seed: Option<u64>,
    /// Starting position in FEN (defaults to the standard start)
    #[arg(long)]
    fen: Option<String>,
}

impl EngineArgs {
    fn opponent(&self) -> Opponent {
        let difficulty = Difficulty::from_name(&self.difficulty);
        match self.seed {
            Some(seed) => Opponent::with_seed(difficulty, seed),
            None => Opponent::new(difficulty),
        }
    }

    fn game(&self) -> Result<Game> {
        load_game(self.fen.as_deref())
    }
}

fn load_game(fen: Option<&str>) -> Result<Game> {
    match fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("cannot load position {fen:?}")),
        None => Ok(Game::new()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { engine, no_auto }) => {
            let mut session = Session::with_opponent(engine.game()?, engine.opponent());
            session.set_auto(!no_auto);
            session.run().context("protocol loop failed")?;
        }
        Some(Commands::Bestmove { engine }) => {
            let mut game = engine.game()?;
            let mut opponent = engine.opponent();
            match opponent.choose(&mut game).context("search failed")? {
                Some(decision) => println!("{}", game.uci(&decision.mv)),
                None => println!("none ({})", game.status()),
            }
        }
        Some(Commands::Bench { fen, depth }) => run_bench(load_game(fen.as_deref())?, depth)?,
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_bench(mut game: Game, max_depth: u32) -> Result<()> {
    println!("depth  value  pruned-nodes  full-nodes  cutoffs");
    for depth in 1..=max_depth {
        let mut pruned = SearchStats::default();
        let mut full = SearchStats::default();
        let value = search_with_stats(
            &mut game,
            depth,
            -SEARCH_BOUND,
            SEARCH_BOUND,
            true,
            &mut pruned,
        )?;
        let check = minimax(&mut game, depth, true, &mut full)?;
        anyhow::ensure!(value == check, "pruned value {value} differs from minimax {check}");
        println!(
            "{depth:>5}  {value:>5}  {:>12}  {:>10}  {:>7}",
            pruned.nodes, full.nodes, pruned.cutoffs
        );
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Rookie-Chess: minimax opponent demo\n");

    let mut game = Game::new();
    let mut white = Opponent::with_seed(Difficulty::Medium, 1);
    let mut black = Opponent::with_seed(Difficulty::Easy, 2);

    for _ in 0..10 {
        let side = game.side_to_move();
        let player = if side == Side::White {
            &mut white
        } else {
            &mut black
        };
        let Some(decision) = player.choose(&mut game)? else {
            break;
        };
        println!(
            "{side} ({}): {} (score {})",
            player.difficulty(),
            game.san(&decision.mv),
            decision.score
        );
        game.apply_move(&decision.mv)?;
        if game.status().is_over() {
            break;
        }
    }

    println!("\n{game}");
    println!("FEN: {}", game.fen());
    println!("Status: {}", game.status());
    Ok(())
}
