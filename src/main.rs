//! `pig` binary: play Pig at the console.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pig_dice::cli::{build_match, init_logging, Args};
use pig_dice::run_match;

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    info!(player1 = %args.player1, player2 = %args.player2, timed = args.timed, "Starting match");

    let mut game = build_match(&args);
    run_match(game.as_mut())?;
    Ok(())
}
