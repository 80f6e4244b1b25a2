//! Terminal games: human against the engine, and engine against itself.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{
    Action, Board, GameSession, Outcome, Turn, best_move, is_terminal, outcome,
};
use tracing::{debug, instrument};

/// Parses a move typed by a human.
///
/// Accepts `row col` (each 0-2, separated by space or comma) or a single
/// cell number 1-9 as shown on the rendered board.
pub fn parse_move(input: &str) -> Result<Action> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell.parse().context("Cell must be a number 1-9")?;
            if !(1..=9).contains(&number) {
                bail!("Cell must be between 1 and 9, got {}", number);
            }
            Ok(Action::from_index(number - 1)?)
        }
        [row, column] => {
            let row: usize = row.parse().context("Row must be a number 0-2")?;
            let column: usize = column.parse().context("Column must be a number 0-2")?;
            Ok(Action::new(row, column)?)
        }
        _ => bail!("Enter a cell number 1-9 or `row col`"),
    }
}

/// Plays one game on the terminal until it ends or input runs out.
///
/// Rejected input is reported and asked for again; it never changes the game.
#[instrument(skip(input, output))]
pub fn play_game<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    session: &mut GameSession,
) -> Result<Outcome> {
    loop {
        writeln!(output, "\n{}\n", session.board())?;

        let submitted = match session.turn() {
            Turn::Finished(result) => {
                writeln!(output, "{}", result)?;
                return Ok(result);
            }
            Turn::AwaitingAutomated(symbol) => {
                writeln!(output, "Engine ({}) is thinking...", symbol)?;
                None
            }
            Turn::AwaitingHuman(symbol) => {
                write!(output, "{} to move: ", symbol)?;
                output.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    bail!("Input closed before the game ended");
                }
                match parse_move(&line) {
                    Ok(action) => Some(action),
                    Err(error) => {
                        writeln!(output, "{:#}", error)?;
                        continue;
                    }
                }
            }
        };

        match session.apply_turn(submitted) {
            Ok(action) => debug!(%action, "Move played"),
            Err(error) => writeln!(output, "{}", error)?,
        }
    }
}

/// Lets the engine play both sides from `start`, printing every ply.
#[instrument(skip(output))]
pub fn self_play<W: Write>(start: Board, mut output: W) -> Result<Outcome> {
    let mut board = start;
    let mut ply = 1;
    while !is_terminal(&board) {
        let mover = board.side_to_move();
        let action = best_move(&board)?;
        board = board.apply(action, mover)?;
        writeln!(output, "{}. {} plays {}", ply, mover, action)?;
        ply += 1;
    }
    let result = outcome(&board);
    writeln!(output, "\n{}\n\n{}", board, result)?;
    Ok(result)
}

