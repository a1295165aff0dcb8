//! Rock Paper Scissors Binary
//!
//! Options: --judge <human|fish|oracle>, --seed, --script, --games, --json, --plain, --verbose, --logs

use clap::Parser;
use rochambeau::cli::Args;

fn main() -> anyhow::Result<()> {
    Args::parse().run()
}
