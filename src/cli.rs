//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file for the interactive game (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of positions (1-9) and print the result
    Replay {
        /// Positions in play order, X first
        #[arg(required = true)]
        positions: Vec<u8>,
    },
}

impl Cli {
    /// The command to run, `play` if none was given.
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.selected_command(), Command::Play);
    }

    #[test]
    fn test_replay_positions() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "1", "5", "2"]).unwrap();
        assert_eq!(
            cli.selected_command(),
            Command::Replay {
                positions: vec![1, 5, 2]
            }
        );
    }

    #[test]
    fn test_replay_requires_positions() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["tictactoe", "play", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
