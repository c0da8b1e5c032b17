//! Tictactoe - terminal front-end for the rules engine.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{Config, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    match cli.selected_command() {
        Command::Play => {
            logging::init_file_logging(config.log_file(), config.log_filter())?;
            info!("Starting interactive game");
            tui::run(&config)
        }
        Command::Replay { positions } => {
            logging::init_stderr_logging(config.log_filter());
            let mut stdout = std::io::stdout().lock();
            replay::replay(&positions, config.symbols(), &mut stdout)?;
            Ok(())
        }
    }
}
