use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::QuizResult;

pub fn render(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], result);
    super::render_controls(frame, chunks[3], "h history  ·  r restart  ·  q quit");
}

fn render_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let content = vec![
        Line::from(""),
        Line::from("Congratulations! You've completed the quiz.".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            result.headline(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            result.result_title.as_str(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(result.result_description.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(widget, area);
}
