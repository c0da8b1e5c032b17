//! Terminal tic-tac-toe.
//!
//! The rules live in [`tictactoe_rules`]; this crate is everything around
//! them: a [`Controller`] that turns hover and commit input into moves and
//! view events, the terminal UI, a headless replay command, configuration
//! and logging.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Controller, GameEvent};
//! use tictactoe_rules::{Mark, Position};
//!
//! let mut controller = Controller::new();
//! controller.hover(Position::Center);
//! let events = controller.commit();
//! assert_eq!(events[1], GameEvent::TurnChanged(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod controller;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{Config, ConfigError, Symbols};
pub use controller::{Controller, GameEvent};
