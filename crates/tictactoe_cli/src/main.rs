//! Tic-tac-toe command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{
    Cli, Command, PlaySession, Settings, render, replay, snapshot_json, snapshot_schema,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?settings, "Settings in effect");

    match cli.command {
        Command::Play => run_play(settings),
        Command::Replay { moves, json } => run_replay(settings, &moves, json),
        Command::Schema => run_schema(),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(settings: Settings) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    PlaySession::new(settings).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Apply moves and print the final state
fn run_replay(settings: Settings, moves: &[String], json: bool) -> Result<()> {
    let engine = replay(moves)?;
    info!(status = %engine.status(), "Replay finished");
    if json {
        println!("{}", snapshot_json(&engine)?);
    } else {
        println!("{}", render(&engine, &settings));
    }
    Ok(())
}

fn run_schema() -> Result<()> {
    println!("{}", snapshot_schema()?);
    Ok(())
}
