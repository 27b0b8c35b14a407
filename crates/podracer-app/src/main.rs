//! Pod racing bot: reads referee telemetry on stdin, writes commands on stdout.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use podracer_app::game_loop;

/// 2-vs-2 pod racing bot
#[derive(Parser)]
#[command(name = "podracer")]
#[command(about = "Per-tick decision engine for a 2-vs-2 pod race")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the referee.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    game_loop::run(stdin.lock(), stdout.lock()).context("race aborted")?;
    Ok(())
}
