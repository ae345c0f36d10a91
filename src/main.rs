//! Console front end
//!
//! Reads one click per line from stdin (or `--script`) and drives a
//! [`Session`] with the [`ConsoleRenderer`] standing in for the 3D scene.
//!
//! Input lines:
//! - a square in algebraic notation (`e2`) clicks whatever is there
//! - `board` prints the position
//! - `reset` starts over
//! - `quit` exits

use anyhow::{Context, Result};
use chess_rules::Square;
use chessview::core::{load_settings, save_settings, settings_path};
use chessview::game::{InteractionOutcome, Session};
use chessview::rendering::console::ConsoleRenderer;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chessview", version, about = "Two-player chess board driven by clicks")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Read clicks from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the effective settings back on exit
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let path = args.settings.unwrap_or_else(settings_path);
    let settings = load_settings(&path);

    let input: Box<dyn BufRead> = match &args.script {
        Some(script) => Box::new(BufReader::new(
            File::open(script).with_context(|| format!("opening script {}", script.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = Session::from_settings(&settings);
    let mut renderer = ConsoleRenderer::new(&settings);
    println!("{}", session.game().board());

    for line in input.lines() {
        let line = line.context("reading input")?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "board" => println!("{}", session.game().board()),
            "reset" => {
                session.reset(&mut renderer);
                println!("{}", session.game().board());
            }
            click => {
                let square: Square = match click.parse() {
                    Ok(square) => square,
                    Err(err) => {
                        warn!("[INPUT] {err}");
                        continue;
                    }
                };
                let pick = session.pick_at(square);
                if let InteractionOutcome::Moved(result) = session.handle(pick, &mut renderer) {
                    println!("{}", session.game().board());
                    match result.status.winner() {
                        Some(winner) => info!("[MOVE] Checkmate, {winner} wins"),
                        None if result.status.is_over() => info!("[MOVE] Stalemate"),
                        None => {}
                    }
                }
            }
        }
    }

    if args.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
    }
    Ok(())
}
