//! Theme tokens for the SeekBar TUI
//!
//! # Color Palette
//! - **Accent**: light blue, matching the seek bar track (focus, highlights)
//! - **Warning**: amber (parse failures, config warnings)
//! - **Muted**: steel blue (hints, unfocused borders)
//!
//! The seek bar's own layers keep the widget palette; [`to_color`] maps it
//! onto terminal colors.

use ratatui::style::{Color, Modifier, Style};

use seekbar_core::Rgb;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Focus, highlights
    pub accent: Color,
    /// Warnings
    pub warning: Color,
    /// Hints, unfocused borders
    pub muted: Color,
    /// Seek bar surface background
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light_blue()
    }
}

impl Theme {
    pub fn light_blue() -> Self {
        Self {
            accent: to_color(Rgb::LIGHT_BLUE_400),
            warning: Color::Rgb(255, 179, 0),
            muted: Color::Rgb(100, 149, 237),
            surface: Color::Rgb(38, 50, 56),
        }
    }

    /// Color for an observed seek value: accent at or above zero, warning below.
    pub fn value_color(&self, value: f32) -> Color {
        if value >= 0.0 {
            self.accent
        } else {
            self.warning
        }
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

/// Border style for a focusable control.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        muted()
    }
}
