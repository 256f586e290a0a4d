use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let title = Paragraph::new(Span::styled(
        "HISTORY",
        Style::default().fg(Color::Cyan).bold(),
    ));
    frame.render_widget(title, chunks[0]);

    if app.history_entries().is_empty() {
        let empty = Paragraph::new("No quizzes completed yet. Take one to see it here.")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_entries(frame, chunks[1], app);
    }

    super::render_controls(frame, chunks[2], "j/k scroll  ·  esc back  ·  q quit");
}

fn render_entries(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in app.history_entries() {
        let when = entry
            .completed_at
            .with_timezone(&Local)
            .format("%b %-d, %Y · %-I:%M %p");
        lines.push(Line::from(vec![
            Span::styled(entry.result_title.as_str(), Style::default().fg(Color::White).bold()),
            Span::styled(format!("  {}", entry.quiz_title), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(
            when.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll(((app.history_scroll() * 3) as u16, 0));
    frame.render_widget(widget, area);
}
