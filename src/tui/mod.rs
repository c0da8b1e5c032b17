//! Terminal UI: the input and output collaborators of the rules engine.
//!
//! Mouse movement (or the arrow keys) picks the targeted cell, a click (or
//! Enter) commits it, and the screen shows the marks, whose turn it is, the
//! outcome and a restart button.

mod app;
mod input;
mod ui;

pub use app::{App, BoardView};
pub use input::{digit_position, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};

use crate::config::Config;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if *config.mouse() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let area = terminal.draw(|frame| ui::draw(frame, app))?.area;
        let layout = ScreenLayout::new(area);

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
                Event::Resize(..) => app.handle_resize(),
                _ => {}
            }
        }

        if app.should_quit() {
            info!(moves = app.controller().game().move_count(), "User quit");
            return Ok(());
        }
    }
}
