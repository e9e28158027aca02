//! Text field and button controls.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

pub fn render_text_field(f: &mut Frame, area: Rect, text: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focus_border(focused))
        .title(" Value ")
        .title_style(theme::muted());

    let mut spans = vec![Span::raw(text)];
    if focused {
        spans.push(Span::styled("▏", theme::accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focus_border(focused));

    let style = if focused {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::accent()
    };
    let para = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(para, area);
}
