use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use terminal_games::game::GameConfig;
use terminal_games::logging;
use terminal_games::modes::{self, InputMode};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Input model; auto picks real-time when attached to a terminal
    #[arg(long, default_value = "auto")]
    mode: Mode,

    /// Append tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Tracing filter, e.g. "info", "debug"
    #[arg(long, default_value = "info")]
    log: String,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Real-time if the host supports it, turn-based otherwise
    Auto,
    /// Keys steer the snake while it moves on its own
    RealTime,
    /// One typed command per move
    TurnBased,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log, cli.log_file.as_deref())?;

    let mode = match cli.mode {
        Mode::Auto => InputMode::detect(),
        Mode::RealTime => InputMode::RealTime,
        Mode::TurnBased => InputMode::TurnBased,
    };

    modes::play(mode, GameConfig::default()).await
}
