mod history;
mod question;
mod result;
mod selection;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.screen {
        Screen::Selection => selection::render(frame, area, app),
        Screen::Question => question::render(frame, area, app),
        Screen::Result(result) => result::render(frame, area, result),
        Screen::History => history::render(frame, area, app),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
