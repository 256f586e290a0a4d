use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, SelectionKind};
use crate::quiz::{QuizSession, Selection};

const OPTION_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const SLIDER_WIDTH: usize = 40;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_timer(frame, chunks[1], session);
    render_question_text(frame, chunks[2], &question.text);
    render_instruction(frame, chunks[3], question.kind);

    match session.selection() {
        Selection::Ranged(value) => render_slider(frame, chunks[4], question, *value),
        selection => render_options(frame, chunks[4], question, selection, app.cursor()),
    }

    let controls = if question.kind == SelectionKind::Ranged {
        "h/l slide  ·  enter next  ·  esc leave quiz"
    } else {
        "j/k navigate  ·  space select  ·  enter next  ·  esc leave quiz"
    };
    super::render_controls(frame, chunks[5], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let index = session.current_index().unwrap_or(0);
    let progress = format!(
        "{}  ·  Question {} of {}",
        session.quiz().title,
        index + 1,
        session.quiz().len()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), area);
}

fn render_timer(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let countdown = session.countdown();
    let color = if countdown.remaining() <= 5 {
        Color::Red
    } else {
        Color::Cyan
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(countdown.ratio().clamp(0.0, 1.0))
        .label(format!("00:{:02}", countdown.remaining()));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_instruction(frame: &mut Frame, area: Rect, kind: SelectionKind) {
    frame.render_widget(Paragraph::new(kind.instruction()).fg(Color::DarkGray), area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selection: &Selection,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.answers.len() * 2);

    for (index, answer) in question.answers.iter().enumerate() {
        let is_cursor = index == cursor;
        let is_selected = selection.is_selected(index);
        let style = match (is_selected, is_cursor) {
            (true, _) => Style::default().fg(Color::Green).bold(),
            (false, true) => Style::default().fg(Color::Cyan).bold(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };
        let check = match (question.kind, is_selected) {
            (SelectionKind::Multiple, true) => "[x]",
            (SelectionKind::Multiple, false) => "[ ]",
            (_, true) => "(*)",
            (_, false) => "( )",
        };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(answer.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_slider(frame: &mut Frame, area: Rect, question: &Question, value: f64) {
    let (left, right) = question.range_labels();
    let position = (value.clamp(0.0, 1.0) * SLIDER_WIDTH as f64).round() as usize;
    let track: String = (0..=SLIDER_WIDTH)
        .map(|i| if i == position { '●' } else { '─' })
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}  ", left), Style::default().fg(Color::Gray)),
            Span::styled(track, Style::default().fg(Color::Cyan)),
            Span::styled(format!("  {}", right), Style::default().fg(Color::Gray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
