//! Pure tic-tac-toe game logic.
//!
//! [`GameState`] is the sole authority on turn order, move legality and
//! the outcome of a game on the fixed 3x3 board. It does no I/O and holds
//! no callbacks: a front-end owns a `GameState`, calls
//! [`GameState::apply_move`] when the player commits to a cell, and renders
//! whatever the returned [`MoveOutcome`] says.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameState, GameStatus, Mark, Position};
//!
//! let mut game = GameState::new();
//! for position in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleRight,
//!     Position::TopRight,
//! ] {
//!     assert!(game.apply_move(position).is_accepted());
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//!
//! // Terminal: further moves are rejected.
//! assert!(!game.apply_move(Position::BottomLeft).is_accepted());
//!
//! game.reset();
//! assert_eq!(game, GameState::new());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod invariants;
mod mark;
mod position;
pub mod rules;
mod state;
mod status;

pub use action::{Move, MoveOutcome, Rejection};
pub use board::Board;
pub use mark::{Cell, Mark};
pub use position::{InvalidPosition, Position};
pub use rules::{LINES, Line};
pub use state::{GameState, InvalidGameState};
pub use status::GameStatus;
