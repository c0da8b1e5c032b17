//! Stateless UI rendering and hit-testing.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tictactoe_rules::{Mark, Position};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESTART_WIDTH: u16 = 15;

/// Where everything goes for a given terminal area.
///
/// Pure geometry so pointer coordinates can be mapped to cells without a
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row.
    pub title: Rect,
    /// Turn indicator row.
    pub turn: Rect,
    /// The board, grid lines included.
    pub board: Rect,
    /// Outcome banner row.
    pub banner: Rect,
    /// Restart button.
    pub restart: Rect,
    /// Key help row.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Title
                Constraint::Length(1),            // Turn
                Constraint::Length(1),            //
                Constraint::Length(BOARD_HEIGHT), // Board
                Constraint::Length(1),            //
                Constraint::Length(1),            // Banner
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            title: chunks[0],
            turn: chunks[1],
            board: center_horizontally(chunks[3], BOARD_WIDTH),
            banner: chunks[5],
            restart: center_horizontally(chunks[6], RESTART_WIDTH),
            help: chunks[7],
        }
    }

    /// Screen area of one cell.
    pub fn cell_rect(&self, position: Position) -> Rect {
        Rect::new(
            self.board.x + u16::from(position.col()) * (CELL_WIDTH + 1),
            self.board.y + u16::from(position.row()) * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// The visible part of a cell; empty when the board was squeezed out.
    pub fn visible_cell_rect(&self, position: Position) -> Rect {
        self.cell_rect(position).intersection(self.board)
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|position| contains(self.visible_cell_rect(*position), column, row))
    }

    /// Whether a terminal coordinate is on the restart button.
    pub fn on_restart(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();
    let symbols = app.symbols();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(title, layout.title);

    if view.banner().is_none() {
        let turn = Line::from(vec![
            Span::raw("Turn: Player "),
            Span::styled(symbols.symbol(view.turn()).to_string(), mark_style(view.turn())),
        ]);
        frame.render_widget(Paragraph::new(turn).centered(), layout.turn);
    }

    draw_board(frame, &layout, app);

    let banner = match (view.banner(), view.notice()) {
        (Some(message), _) => Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        (None, Some(notice)) => {
            Paragraph::new(notice.to_string()).style(Style::default().fg(Color::DarkGray))
        }
        (None, None) => Paragraph::new(""),
    };
    frame.render_widget(banner.centered(), layout.banner);

    if view.restart_visible() {
        let restart = Paragraph::new("Restart")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .centered()
            .block(Block::bordered());
        frame.render_widget(restart, layout.restart);
    }

    let help = Paragraph::new("arrows/mouse: aim  enter/click: place  1-9: place  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let view = app.view();

    let grid = Paragraph::new(grid_lines()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(grid, layout.board);

    for position in Position::ALL {
        let area = layout.visible_cell_rect(position);
        if area.is_empty() {
            continue;
        }

        let content = match view.mark_at(position) {
            Some(mark) => Span::styled(app.symbols().symbol(mark).to_string(), mark_style(mark)),
            None => Span::styled(
                position.number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let mut style = Style::default();
        if view
            .winning_line()
            .is_some_and(|line| line.contains(&position))
        {
            style = style.bg(Color::Green);
        }
        if app.hovered() == Some(position) {
            style = style.bg(Color::White);
        }

        let text = vec![Line::default(), Line::from(content).centered()];
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

fn grid_lines() -> Vec<Line<'static>> {
    let blank = " ".repeat(usize::from(CELL_WIDTH));
    let rule = "─".repeat(usize::from(CELL_WIDTH));
    let cells = format!("{blank}│{blank}│{blank}");
    let separator = format!("{rule}┼{rule}┼{rule}");

    (0..BOARD_HEIGHT)
        .map(|y| {
            if (y + 1) % (CELL_HEIGHT + 1) == 0 {
                Line::from(separator.clone())
            } else {
                Line::from(cells.clone())
            }
        })
        .collect()
}
