use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0]);
    render_categories(frame, chunks[1], app);
    super::render_controls(
        frame,
        chunks[2],
        "j/k choose  ·  enter start  ·  h history  ·  q quit",
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "PERSONALITY QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Pick a quiz to discover your style.".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, category) in app.categories().iter().enumerate() {
        let is_selected = index == app.selected_category();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", category.icon), style),
            Span::styled(category.title.as_str(), style),
        ]));
        for subtitle in category.subtitle.lines() {
            lines.push(Line::from(Span::styled(
                format!("      {}", subtitle),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
