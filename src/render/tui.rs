use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{Renderer, glyph};
use crate::game::{Cell, EndReason, GameSession, GameState, Status};

/// Real-time screen: header, board, controls, plus pause and game over overlays
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(backend: B) -> Result<Self> {
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(Self { terminal })
    }

    fn render(frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(Self::render_stats(session), chunks[0]);

        match session.status() {
            Status::Over(reason) => {
                let game_over = Self::render_game_over(session, reason);
                frame.render_widget(game_over, chunks[1]);
            }
            status => {
                frame.render_widget(Self::render_grid(session.state()), chunks[1]);
                if status == Status::Paused {
                    let text = "PAUSED (Press P to continue)";
                    let area = centered(chunks[1], text.len() as u16 + 4, 3);
                    frame.render_widget(Clear, area);
                    frame.render_widget(Self::render_pause(text), area);
                }
            }
        }

        frame.render_widget(Self::render_controls(), chunks[2]);
    }

    fn render_grid(state: &GameState) -> Paragraph<'static> {
        let grid = state.to_grid();
        let lines: Vec<Line> = grid
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        let style = match cell {
                            Cell::Head => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            Cell::Body => Style::default().fg(Color::Green),
                            Cell::Food => Style::default().fg(Color::Yellow),
                            Cell::Wall | Cell::Empty => Style::default(),
                        };
                        Span::styled(glyph(*cell).to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn render_stats(session: &GameSession) -> Paragraph<'static> {
        let state = session.state();
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let metrics = session.metrics();

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value),
            Span::raw("  "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("  "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", state.speed.as_millis()), value),
            Span::raw("  "),
            Span::styled("Ticks: ", label),
            Span::styled(metrics.ticks.to_string(), value),
            Span::raw("  "),
            Span::styled("Food: ", label),
            Span::styled(metrics.foods_eaten.to_string(), value),
            Span::raw("  "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_pause(text: &'static str) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }

    fn render_game_over(session: &GameSession, reason: EndReason) -> Paragraph<'static> {
        let title = match reason {
            EndReason::BoardFull => "YOU FILLED THE BOARD!",
            _ => "GAME OVER!",
        };
        let hold = session.config().game_over_hold.as_secs();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.state().score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Exiting in {hold} seconds..."),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls() -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn draw(&mut self, session: &GameSession) -> Result<()> {
        self.terminal
            .draw(|frame| Self::render(frame, session))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
