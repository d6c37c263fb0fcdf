use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use speaker_deck::constants::*;
use speaker_deck::{Deck, Presenter, window};

/// Present the premium speaker market analysis deck.
#[derive(Parser, Debug)]
#[command(name = "speaker-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Render every slide to this video file (via ffmpeg) instead of presenting
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Seconds each slide stays on screen when exporting
    #[arg(long, default_value_t = DEFAULT_SECONDS_PER_SLIDE, value_parser = parse_seconds)]
    seconds_per_slide: f32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH / 2, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT / 2, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let secs: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("expected a positive number of seconds, got {}", s))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // The deck is validated once, before anything is shown
    let deck = Deck::speaker_market().context("Built-in deck is malformed")?;
    let mut presenter = Presenter::new(deck);

    match &args.export {
        Some(output) => window::export(&mut presenter, output, args.seconds_per_slide, args.width, args.height),
        None => window::run(&mut presenter, args.width, args.height),
    }
}
