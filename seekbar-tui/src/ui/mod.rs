//! Top-level UI layout — controls row, seek bar, hints and status bar.

pub mod controls;
pub mod seek_bar_view;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Focus};
use crate::theme::{self, Theme};

use self::seek_bar_view::SeekBarView;

/// Screen regions, recomputed whenever the terminal size changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub button: Rect,
    /// Bordered block around the seek bar.
    pub seek_bar_block: Rect,
    /// The seek bar's drawing surface.
    pub seek_bar: Rect,
    pub hints: Rect,
    pub status: Rect,
}

/// Split `area` for a seek bar `seek_bar_rows` tall.
pub fn screen_layout(area: Rect, seek_bar_rows: u16) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(seek_bar_rows.saturating_add(2)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(rows[0]);

    ScreenLayout {
        input: controls[0],
        button: controls[1],
        seek_bar_block: rows[1],
        seek_bar: rows[1].inner(Margin::new(1, 1)),
        hints: rows[2],
        status: rows[3],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = &app.layout;

    controls::render_text_field(f, layout.input, &app.input, app.focus == Focus::TextField);
    controls::render_button(f, layout.button, "Set", app.focus == Focus::Button);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focus_border(app.focus == Focus::SeekBar))
        .title(" SeekBar ")
        .title_style(theme::accent_bold());
    f.render_widget(block, layout.seek_bar_block);
    f.render_widget(
        SeekBarView::new(&app.seek_bar, &app.config.host).background(Theme::default().surface),
        layout.seek_bar,
    );

    render_hints(f, layout.hints);
    status_bar::render(f, layout.status, app);
}

fn render_hints(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("[Tab]", theme::accent()),
            Span::styled(" focus  ", theme::muted()),
            Span::styled("[Enter]", theme::accent()),
            Span::styled(" set value  ", theme::muted()),
            Span::styled("[←/→]", theme::accent()),
            Span::styled(" nudge  ", theme::muted()),
            Span::styled("[q]", theme::accent()),
            Span::styled(" quit", theme::muted()),
        ]),
        Line::from(Span::styled("Drag the knob with the mouse.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stacks_regions() {
        let layout = screen_layout(Rect::new(0, 0, 80, 12), 2);
        assert_eq!(layout.input, Rect::new(0, 0, 71, 3));
        assert_eq!(layout.button, Rect::new(71, 0, 9, 3));
        assert_eq!(layout.seek_bar_block, Rect::new(0, 3, 80, 4));
        assert_eq!(layout.seek_bar, Rect::new(1, 4, 78, 2));
        assert_eq!(layout.hints, Rect::new(0, 7, 80, 4));
        assert_eq!(layout.status, Rect::new(0, 11, 80, 1));
    }

    #[test]
    fn taller_track_gets_more_rows() {
        let layout = screen_layout(Rect::new(0, 0, 80, 20), 4);
        assert_eq!(layout.seek_bar.height, 4);
    }
}
