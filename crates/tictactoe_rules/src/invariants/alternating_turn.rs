//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: players alternate, X first.
///
/// While the game is in progress the player to move is X after an even
/// number of moves and O after an odd number. Once it has ended the turn
/// no longer flips, so the current player is whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let (x, o) = (game.board().count(Mark::X), game.board().count(Mark::O));
        if x != o && x != o + 1 {
            return false;
        }

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected = if game.status().is_terminal() {
            history.last().map(|mov| mov.mark)
        } else if history.len() % 2 == 0 {
            Some(Mark::X)
        } else {
            Some(Mark::O)
        };

        expected == Some(game.current_player())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
