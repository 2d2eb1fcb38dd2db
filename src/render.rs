//! Terminal renderer for a frame snapshot. Draws from coordinate lists only;
//! the game engine never sees this module.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::controller::FrameSnapshot;
use crate::game::{Coordinate, GamePhase};

pub fn draw(frame: &mut Frame, snap: &FrameSnapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(header(snap), rows[0]);

    let board_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(snap.grid_width as u16 * 2 + 2),
            Constraint::Min(0),
        ])
        .split(rows[1])[1];

    match snap.phase {
        GamePhase::Running => frame.render_widget(board(snap), board_area),
        GamePhase::GameOver => frame.render_widget(game_over(snap), board_area),
    }

    frame.render_widget(footer(), rows[2]);
}

fn header(snap: &FrameSnapshot) -> Paragraph<'_> {
    let mut spans = vec![
        Span::styled("Score ", Style::default().fg(Color::Yellow)),
        Span::styled(
            snap.score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Best ", Style::default().fg(Color::Yellow)),
        Span::raw(snap.high_score.to_string()),
        Span::raw("   "),
        Span::styled("Time ", Style::default().fg(Color::Yellow)),
        Span::raw(snap.clock.clone()),
    ];
    if snap.paused {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "PAUSED",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn board(snap: &FrameSnapshot) -> Paragraph<'_> {
    let head = snap.snake.first().copied();
    let mut lines = Vec::with_capacity(snap.grid_height as usize);

    for y in 0..snap.grid_height {
        let mut spans = Vec::with_capacity(snap.grid_width as usize);
        for x in 0..snap.grid_width {
            let cell = Coordinate::new(x, y);
            let span = if head == Some(cell) {
                Span::styled(
                    "▣ ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else if snap.snake.contains(&cell) {
                Span::styled("■ ", Style::default().fg(Color::Green))
            } else if cell == snap.food {
                Span::styled(
                    "● ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" snake "),
    )
}

fn game_over(snap: &FrameSnapshot) -> Paragraph<'_> {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final score ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snap.score.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart, "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn footer() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("↑↓←→/WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" move  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(" pause  "),
        Span::styled("R", Style::default().fg(Color::Cyan)),
        Span::raw(" restart  "),
        Span::styled("Q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center)
}
