//! Headless self-play runner for the autoplay search.
//!
//! Usage: cargo run --release --bin autoplay -- --games 8 --seed 42 --show-board

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use autodrop_engine::{PieceQueue, ScoreTable};
use autodrop_eval::EvalWeights;
use autodrop_search::{play_game, GameSummary, MoveSearch};

/// Let the move search play complete games without a UI
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Run headless autoplay games and report the results", long_about = None)]
struct Args {
    /// Number of games to play (run in parallel)
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Stop each game after this many pieces (0 = until game over)
    #[arg(long, default_value_t = 1000)]
    max_pieces: u32,

    /// JSON file with evaluation weights; missing fields keep their defaults
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Enable the landing-height term with this weight
    #[arg(long, allow_hyphen_values = true)]
    landing_weight: Option<f64>,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,

    /// Print one JSON object per game instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct GameReport<'a> {
    game: u32,
    seed: u64,
    #[serde(flatten)]
    summary: &'a GameSummary,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn load_weights(args: &Args) -> Result<EvalWeights> {
    let mut weights = match &args.weights {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading weights from {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing weights in {}", path.display()))?
        }
        None => EvalWeights::default(),
    };
    if let Some(landing) = args.landing_weight {
        weights.landing_height = Some(landing);
    }
    Ok(weights)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let weights = load_weights(&args)?;
    info!(?weights, games = args.games, seed = args.seed, "starting autoplay");

    let search = MoveSearch::new(weights);
    let max_pieces = (args.max_pieces > 0).then_some(args.max_pieces);

    let summaries: Vec<GameSummary> = (0..args.games)
        .into_par_iter()
        .map(|game| {
            let seed = args.seed.wrapping_add(game as u64);
            play_game(
                search.clone(),
                PieceQueue::uniform(seed),
                ScoreTable::classic(),
                max_pieces,
            )
            .with_context(|| format!("game {game} (seed {seed})"))
        })
        .collect::<Result<_>>()?;

    for (game, summary) in summaries.iter().enumerate() {
        let game = game as u32;
        let seed = args.seed.wrapping_add(game as u64);
        if args.json {
            let report = GameReport {
                game,
                seed,
                summary,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "game {game} (seed {seed}): {} pieces, {} lines, score {}{}",
                summary.pieces_placed,
                summary.lines_cleared,
                summary.score,
                if summary.topped_out { ", topped out" } else { "" }
            );
        }
        if args.show_board {
            println!("{}", summary.final_grid);
        }
    }

    if !args.json && summaries.len() > 1 {
        let n = summaries.len() as f64;
        let lines: u32 = summaries.iter().map(|s| s.lines_cleared).sum();
        let score: u64 = summaries.iter().map(|s| s.score as u64).sum();
        let topped = summaries.iter().filter(|s| s.topped_out).count();
        println!(
            "{} games: mean {:.1} lines, mean score {:.1}, {} topped out",
            summaries.len(),
            lines as f64 / n,
            score as f64 / n,
            topped
        );
    }

    Ok(())
}
