use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use super::game::{CoordinateError, Outcome, TicTacToe, parse_coordinate};

enum Prompt {
    Parsed(Result<usize, CoordinateError>),
    Failed,
    Closed,
}

/// Play one game over a line-based console
///
/// A row that is not a number is rejected before the column is asked for.
/// Otherwise both coordinates are read and the pair is checked together.
/// Bad input is reported and the same player is asked again. Returns `None`
/// if input ends before the game does.
pub fn play<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<Option<Outcome>> {
    let mut game = TicTacToe::new();

    loop {
        write!(out, "\n\n\n{}", game.board())?;
        writeln!(out, "\n\n\nPlayer {}'s turn.\n", game.current_player())?;

        let row = match ask(&mut input, &mut out, "Enter row (0-2): ")? {
            Prompt::Parsed(Err(err @ CoordinateError::NotANumber(_))) => {
                reject(&mut out, &err)?;
                continue;
            }
            Prompt::Parsed(row) => row,
            Prompt::Failed => continue,
            Prompt::Closed => return Ok(None),
        };
        let col = match ask(&mut input, &mut out, "Enter column (0-2): ")? {
            Prompt::Parsed(col) => col,
            Prompt::Failed => continue,
            Prompt::Closed => return Ok(None),
        };

        let (row, col) = match (row, col) {
            (Ok(row), Ok(col)) => (row, col),
            (_, Err(err @ CoordinateError::NotANumber(_))) | (Err(err), _) | (_, Err(err)) => {
                reject(&mut out, &err)?;
                continue;
            }
        };
        writeln!(out, "\n")?;

        match game.play(row, col) {
            Ok(None) => {}
            Ok(Some(outcome)) => {
                write!(out, "\n\n\n{}", game.board())?;
                match outcome {
                    Outcome::Win(winner) => writeln!(out, "Player {winner} wins!")?,
                    Outcome::Draw => writeln!(out, "It's a draw!")?,
                }
                return Ok(Some(outcome));
            }
            Err(err) => {
                debug!(%err, row, col, "move rejected");
                writeln!(out, "{err}")?;
            }
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Prompt> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(Prompt::Closed),
        Ok(_) => Ok(Prompt::Parsed(parse_coordinate(&line))),
        Err(err) => {
            warn!(%err, "failed to read input");
            writeln!(out, "An error occurred: {err}")?;
            Ok(Prompt::Failed)
        }
    }
}

fn reject<W: Write>(out: &mut W, err: &CoordinateError) -> Result<()> {
    debug!(%err, "bad coordinate");
    writeln!(out, "{err}")?;
    Ok(())
}
