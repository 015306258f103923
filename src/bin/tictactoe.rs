use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use terminal_games::logging;
use terminal_games::tictactoe::console;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Two-player tic-tac-toe in the terminal")]
struct Cli {
    /// Append tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Tracing filter, e.g. "info", "debug"
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log, cli.log_file.as_deref())?;

    if let Err(err) = console::play(stdin().lock(), stdout()) {
        eprintln!("An error occurred: {err:#}");
    }

    Ok(())
}
