//! Bottom status bar — observed seek value, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}

pub fn status_line(app: &AppState) -> Line<'_> {
    let mut spans: Vec<Span> = Vec::new();

    match app.last_seek {
        Some(value) => {
            spans.push(Span::styled(" onSeek ", theme::muted()));
            spans.push(Span::styled(
                format!("{value:.2}"),
                Style::default().fg(Theme::default().value_color(value)),
            ));
            spans.push(Span::styled(format!(" ({} updates)", app.seek_count), theme::muted()));
        }
        None => spans.push(Span::styled(" onSeek -", theme::muted())),
    }

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::app;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn before_any_report() {
        let app = app();
        assert_eq!(text(&status_line(&app)), " onSeek -");
    }

    #[test]
    fn shows_reported_value_and_message() {
        let mut app = app();
        app.input = "-25".into();
        app.submit_input();

        let line = text(&status_line(&app));
        let reported = app.last_seek.unwrap();
        assert!(line.starts_with(&format!(" onSeek {reported:.2} (1 updates)")), "{line}");
        assert!(line.ends_with("| Set to -25"), "{line}");
    }
}
