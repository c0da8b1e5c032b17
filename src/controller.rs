//! Drives a [`GameState`] from discrete input and reports what to render.
//!
//! The controller owns the game and the currently targeted cell. Input code
//! tells it where the pointer is and when the player commits; it answers
//! with [`GameEvent`]s for the view to apply.

use tictactoe_rules::{GameState, GameStatus, Line, Mark, Move, MoveOutcome, Position, Rejection};
use tracing::{debug, info, instrument};

/// Something the view has to reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Draw `mark` at `position`.
    MarkPlaced(Move),
    /// Show whose turn it is.
    TurnChanged(Mark),
    /// Show the outcome and offer a restart.
    GameOver {
        /// Terminal status.
        status: GameStatus,
        /// Banner text ("It's a draw!" or "Winner: Player X").
        message: String,
        /// The completed line when the game was won.
        line: Option<Line>,
    },
    /// The commit was not applied.
    MoveRejected(Rejection),
    /// Remove all marks, hide the outcome and the restart control.
    Cleared,
}

/// Owns the game and the hover target.
#[derive(Debug, Default)]
pub struct Controller {
    game: GameState,
    hovered: Option<Position>,
}

impl Controller {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The cell the player is currently targeting.
    pub fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// The pointer entered a cell.
    #[instrument(skip(self))]
    pub fn hover(&mut self, position: Position) {
        self.hovered = Some(position);
    }

    /// The pointer left a cell.
    ///
    /// Only clears the target if it is the cell being left, so a late
    /// "leave" for an old cell does not cancel a newer hover.
    #[instrument(skip(self))]
    pub fn leave(&mut self, position: Position) {
        if self.hovered == Some(position) {
            self.hovered = None;
        }
    }

    /// Drops the hover target.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// The player pressed the commit control.
    ///
    /// Does nothing unless a cell is targeted.
    #[instrument(skip(self), fields(hovered = ?self.hovered))]
    pub fn commit(&mut self) -> Vec<GameEvent> {
        match self.hovered {
            Some(position) => self.place(position),
            None => {
                debug!("Commit with no target ignored");
                Vec::new()
            }
        }
    }

    /// Places the current player's mark at `position`.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position) -> Vec<GameEvent> {
        match self.game.apply_move(position) {
            MoveOutcome::Accepted { placed, status } => {
                info!(%placed, %status, "Mark placed");
                let mut events = vec![GameEvent::MarkPlaced(placed)];
                match status.outcome_message() {
                    Some(message) => events.push(GameEvent::GameOver {
                        status,
                        message,
                        line: self.game.winning_line(),
                    }),
                    None => events.push(GameEvent::TurnChanged(self.game.current_player())),
                }
                events
            }
            MoveOutcome::Rejected(rejection) => {
                debug!(%rejection, "Move rejected");
                vec![GameEvent::MoveRejected(rejection)]
            }
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.game.reset();
        self.hovered = None;
        vec![
            GameEvent::Cleared,
            GameEvent::TurnChanged(self.game.current_player()),
        ]
    }
}
