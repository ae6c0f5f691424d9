use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameOverCause, GameState, Position};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(0),    // board
                Constraint::Length(3), // key help
            ])
            .split(frame.area());

        frame.render_widget(self.header(state, stats), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if let Some(cause) = state.game_over {
            frame.render_widget(self.game_over_panel(cause, state, stats), board_area);
        } else {
            frame.render_widget(self.board(state, paused), board_area);
        }

        frame.render_widget(self.key_help(chunks[2]), chunks[2]);
    }

    fn board(&self, state: &GameState, paused: bool) -> Paragraph<'_> {
        let head_style = Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(Color::Green);
        let food_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let empty_style = Style::default().fg(Color::DarkGray);

        let mut lines = Vec::with_capacity(state.grid_height);
        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);
            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled("@ ", head_style)
                } else if state.snake.occupies(pos) {
                    Span::styled("o ", body_style)
                } else if pos == state.food {
                    Span::styled("* ", food_style)
                } else {
                    Span::styled(". ", empty_style)
                };
                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn header(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value),
            Span::raw("   "),
            Span::styled("High: ", label),
            Span::styled(stats.high_score.to_string(), value),
            Span::raw("   "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(stats.clock(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn game_over_panel(
        &self,
        cause: GameOverCause,
        state: &GameState,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let reason = match cause {
            GameOverCause::Wall => "You hit the wall",
            GameOverCause::SelfCollision => "You bit yourself",
            GameOverCause::BoardFull => "You filled the whole board!",
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(reason, Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn key_help(&self, _area: Rect) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw("/"),
            Span::styled("WASD", key),
            Span::raw(" move   "),
            Span::styled("Space", key),
            Span::raw(" pause   "),
            Span::styled("R", key),
            Span::raw(" restart   "),
            Span::styled("Q", key),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
