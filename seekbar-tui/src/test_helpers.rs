//! Test helpers for building a laid-out app

use ratatui::layout::Rect;

use crate::app::AppState;
use crate::config::AppConfig;

/// An app with default config laid out on an 80×12 screen.
pub fn app() -> AppState {
    let mut app = AppState::new(AppConfig::default());
    app.apply_layout(Rect::new(0, 0, 80, 12));
    app
}
