//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use super::ui::ScreenLayout;
use crate::config::{Config, Symbols};
use crate::controller::{Controller, GameEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_rules::{Line, Mark, Position};
use tracing::{debug, instrument};

/// What is currently on screen, built only from [`GameEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    marks: [Option<Mark>; 9],
    turn: Mark,
    banner: Option<String>,
    winning_line: Option<Line>,
    restart_visible: bool,
    notice: Option<String>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            marks: [None; 9],
            turn: Mark::X,
            banner: None,
            winning_line: None,
            restart_visible: false,
            notice: None,
        }
    }
}

fn slot(position: Position) -> usize {
    usize::from(position.number() - 1)
}

impl BoardView {
    /// Updates the view for one event.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MarkPlaced(placed) => {
                self.marks[slot(placed.position)] = Some(placed.mark);
                self.notice = None;
            }
            GameEvent::TurnChanged(mark) => self.turn = *mark,
            GameEvent::GameOver { message, line, .. } => {
                self.banner = Some(message.clone());
                self.winning_line = *line;
                self.restart_visible = true;
            }
            GameEvent::MoveRejected(rejection) => self.notice = Some(rejection.to_string()),
            GameEvent::Cleared => *self = Self::default(),
        }
    }

    /// Mark drawn at a position.
    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        self.marks[slot(position)]
    }

    /// Turn indicator.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Outcome banner, shown once the game has ended.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Line to highlight.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Whether the restart control is shown.
    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    /// Why the last commit did nothing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    view: BoardView,
    symbols: Symbols,
    allow_early_restart: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &Config) -> Self {
        Self {
            controller: Controller::new(),
            view: BoardView::default(),
            symbols: config.symbols().clone(),
            allow_early_restart: *config.allow_early_restart(),
            should_quit: false,
        }
    }

    /// What to draw.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Glyphs for the marks.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// The targeted cell.
    pub fn hovered(&self) -> Option<Position> {
        self.controller.hovered()
    }

    /// The controller driving the game.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a restart is currently offered.
    pub fn can_restart(&self) -> bool {
        self.view.restart_visible() || self.allow_early_restart
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in &events {
            self.view.apply(event);
        }
    }

    fn commit_at(&mut self, position: Position) {
        self.controller.hover(position);
        let events = self.controller.commit();
        self.dispatch(events);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let events = self.controller.commit();
                self.dispatch(events);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let next = match self.controller.hovered() {
                    Some(current) => move_cursor(current, key.code),
                    None => Position::Center,
                };
                self.controller.hover(next);
            }
            code => {
                if let Some(position) = digit_position(code) {
                    self.commit_at(position);
                }
            }
        }
    }

    /// Handles pointer movement and clicks.
    #[instrument(skip(self, layout), fields(kind = ?mouse.kind, column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        match mouse.kind {
            MouseEventKind::Moved => self.track_pointer(layout.cell_at(mouse.column, mouse.row)),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.view.restart_visible() && layout.on_restart(mouse.column, mouse.row) {
                    self.restart();
                } else if let Some(position) = layout.cell_at(mouse.column, mouse.row) {
                    self.commit_at(position);
                }
            }
            _ => {}
        }
    }

    /// Cells move when the terminal is resized, so any hover is stale.
    pub fn handle_resize(&mut self) {
        self.controller.clear_hover();
    }

    fn track_pointer(&mut self, target: Option<Position>) {
        match (self.controller.hovered(), target) {
            (Some(previous), Some(position)) if previous != position => {
                self.controller.leave(previous);
                self.controller.hover(position);
            }
            (None, Some(position)) => self.controller.hover(position),
            (Some(previous), None) => self.controller.leave(previous),
            _ => {}
        }
    }

    /// Starts a new game if a restart is offered.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if !self.can_restart() {
            debug!("Restart ignored while the game is running");
            return;
        }
        let events = self.controller.restart();
        self.dispatch(events);
    }
}
