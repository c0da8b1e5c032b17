//! Headless replay of a move list.

use crate::config::Symbols;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_rules::{Board, Cell, GameState, MoveOutcome};
use tracing::{info, instrument};

/// Plays `positions` (1-9) in order, writing each result, the final board
/// and the status to `out`.
///
/// Rejected moves are reported and skipped. A number outside 1..9 stops
/// the replay with an error.
#[instrument(skip(symbols, out))]
pub fn replay(positions: &[u8], symbols: &Symbols, out: &mut impl Write) -> Result<GameState> {
    let mut game = GameState::new();

    for (turn, &number) in positions.iter().enumerate() {
        let outcome = game
            .apply_number(number)
            .with_context(|| format!("Move {} is not a board position", turn + 1))?;

        match outcome {
            MoveOutcome::Accepted { placed, .. } => writeln!(
                out,
                "Move {}: {} -> {}",
                turn + 1,
                symbols.symbol(placed.mark),
                placed.position
            )?,
            MoveOutcome::Rejected(rejection) => {
                writeln!(out, "Move {}: rejected: {}", turn + 1, rejection)?
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", render_board(game.board(), symbols))?;
    writeln!(out)?;
    writeln!(out, "{}", status_line(&game))?;

    info!(status = %game.status(), moves = game.move_count(), "Replay finished");
    Ok(game)
}

/// The board as a 3-line grid using the configured glyphs.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * 3 + col + 1).to_string(),
                    Cell::Marked(mark) => symbols.symbol(*mark).to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Same wording as the interactive banner; glyphs only change the board.
fn status_line(game: &GameState) -> String {
    game.status().outcome_message().unwrap_or_else(|| {
        format!("In progress: Player {} to move", game.current_player())
    })
}
