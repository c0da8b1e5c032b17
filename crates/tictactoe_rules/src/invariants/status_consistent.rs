//! Status consistency: the recorded status is what the rules say about the board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: status and winning line agree with a fresh evaluation of the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        if rules::evaluate(game.board()) != game.status() {
            return false;
        }

        match (game.status().winner(), game.winning_line()) {
            (Some(mark), Some(line)) => rules::check_winner(game.board()) == Some((mark, line)),
            (Some(_), None) => false,
            (None, line) => line.is_none(),
        }
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}
