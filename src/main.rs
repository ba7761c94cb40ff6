//! Headless Glow Grid runner (default binary).
//!
//! Plays a greedy autoplay session: each move takes the first slot whose piece
//! fits and drops it on the first fitting cell in row-major order. Prints the
//! board after every move, or one JSON session snapshot per line with `--json`.
//!
//! Logs go to stderr so JSON output stays machine-readable.

use anyhow::{anyhow, Result};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use glow_grid::engine::{GameConfig, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    seed: Option<u32>,
    moves: u32,
    json: bool,
    verbose: u8,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: None,
            moves: 50,
            json: false,
            verbose: 0,
        }
    }
}

fn parse_args(args: &[String]) -> Result<RunOptions> {
    let mut opts = RunOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                opts.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --moves"))?;
                opts.moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --moves value: {}", v))?;
            }
            "--json" => opts.json = true,
            "-v" => opts.verbose = opts.verbose.saturating_add(1),
            "-vv" => opts.verbose = opts.verbose.saturating_add(2),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(opts)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
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

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    init_logging(opts.verbose);

    let mut config = GameConfig::from_env();
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    let session = Session::new(config)?;

    for step in 1..=opts.moves {
        let Some((slot, row, col)) = session.first_fit() else {
            break;
        };
        let placement = session.place_at(slot, row, col)?;

        if opts.json {
            println!("{}", serde_json::to_string(&session.snapshot())?);
        } else {
            println!(
                "move {}: {} from slot {} at ({}, {})  score {}  lines {}",
                step,
                placement.piece.as_str(),
                slot,
                placement.row,
                placement.col,
                session.score(),
                session.lines()
            );
            println!("{}", session.board());
        }
    }

    info!(
        score = session.score(),
        lines = session.lines(),
        placements = session.placements(),
        game_over = session.is_game_over(),
        "autoplay finished"
    );
    if !opts.json {
        println!(
            "final: score {}  lines {}  placements {}{}",
            session.score(),
            session.lines(),
            session.placements(),
            if session.is_game_over() { "  (game over)" } else { "" }
        );
    }
    Ok(())
}
