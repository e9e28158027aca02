//! Application state — single-owner, main-thread only.
//!
//! The seek bar reports value changes through its listener, which forwards
//! them over a channel; the app drains the channel once per frame.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use seekbar_core::{MeasureSpec, PointerEvent, PointerOutcome, SeekBar};

use crate::config::AppConfig;
use crate::ui::{self, ScreenLayout};

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    TextField,
    Button,
    SeekBar,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::TextField => Focus::Button,
            Focus::Button => Focus::SeekBar,
            Focus::SeekBar => Focus::TextField,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::TextField => Focus::SeekBar,
            Focus::Button => Focus::TextField,
            Focus::SeekBar => Focus::Button,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

pub struct AppState {
    pub running: bool,
    pub config: AppConfig,
    pub seek_bar: SeekBar,
    seek_rx: Receiver<f32>,
    pub focus: Focus,
    pub input: String,
    pub status_message: Option<(String, StatusLevel)>,
    /// Last value the seek bar reported, and how many reports arrived.
    pub last_seek: Option<f32>,
    pub seek_count: u64,
    pub layout: ScreenLayout,
    /// A mouse press started on the seek bar and has not been released.
    pub dragging: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (tx, seek_rx) = mpsc::channel();
        let mut seek_bar = SeekBar::new(config.seek_bar);
        seek_bar.set_listener(move |value: f32| {
            let _ = tx.send(value);
        });

        // The first config problem goes to the status bar; all are logged at startup.
        let status_message = config
            .seek_bar
            .validate()
            .first()
            .map(|warning| (format!("Config: {warning}"), StatusLevel::Warning));

        Self {
            running: true,
            config,
            seek_bar,
            seek_rx,
            focus: Focus::default(),
            input: String::new(),
            status_message,
            last_seek: None,
            seek_count: 0,
            layout: ScreenLayout::default(),
            dragging: false,
            dirty: true,
        }
    }

    /// Lay the screen out for `area` and measure the seek bar into its slot.
    pub fn apply_layout(&mut self, area: Rect) {
        let layout = ui::screen_layout(area, self.config.seek_bar_rows());
        if layout != self.layout {
            self.layout = layout;
            self.dirty = true;
        }
        let host = &self.config.host;
        let slot = self.layout.seek_bar;
        self.seek_bar.measure(
            MeasureSpec::exactly(slot.width as f32 * host.px_per_column),
            MeasureSpec::at_most(slot.height as f32 * host.px_per_row),
        );
    }

    /// Per-frame housekeeping: collect reported values, step the knob
    /// feedback.
    pub fn tick(&mut self, dt: Duration) {
        self.drain_seek_reports();
        self.seek_bar.advance(dt);
    }

    fn drain_seek_reports(&mut self) {
        while let Ok(value) = self.seek_rx.try_recv() {
            self.last_seek = Some(value);
            self.seek_count += 1;
            self.dirty = true;
        }
    }

    /// Whether anything changed since the last frame. Clears the flags.
    pub fn take_redraw(&mut self) -> bool {
        let seek_bar = self.seek_bar.take_redraw_request();
        std::mem::take(&mut self.dirty) | seek_bar
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The Set button: parse the text field and assign it to the seek bar.
    pub fn submit_input(&mut self) {
        let text = self.input.trim();
        match text.parse::<f32>() {
            Ok(value) if !value.is_finite() => {
                warn!(input = %text, "text field is not a finite number");
                self.set_warning(format!("Not a finite number: {text:?}"));
            }
            Ok(value) => {
                debug!(value, "assigning value from text field");
                self.seek_bar.set_value(value);
                self.drain_seek_reports();
                self.set_status(format!("Set to {value}"));
            }
            Err(err) => {
                warn!(input = %text, %err, "text field is not a number");
                self.set_warning(format!("Not a number: {text:?}"));
            }
        }
    }

    /// Step a focused seek bar by `steps × nudge-step`.
    pub fn nudge(&mut self, steps: f32) {
        let value = self.seek_bar.value() + steps * self.config.host.nudge_step;
        self.seek_bar.set_value(value);
        self.drain_seek_reports();
    }

    /// Surface-local x for the center of terminal `column`. Columns left of
    /// the seek bar give negative coordinates.
    pub fn surface_x(&self, column: u16) -> f32 {
        let origin = self.layout.seek_bar.x as f32;
        (column as f32 - origin + 0.5) * self.config.host.px_per_column
    }

    pub fn surface_y(&self, row: u16) -> f32 {
        let origin = self.layout.seek_bar.y as f32;
        (row as f32 - origin + 0.5) * self.config.host.px_per_row
    }

    /// Forward a pointer event at terminal `(column, row)` to the seek bar.
    pub fn pointer(&mut self, mut event: PointerEvent, column: u16, row: u16) -> PointerOutcome {
        event.x = self.surface_x(column);
        event.y = self.surface_y(row);
        let outcome = self.seek_bar.handle_pointer_event(event);
        if !outcome.is_ignored() {
            self.drain_seek_reports();
            self.dirty = true;
        }
        outcome
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Info));
        self.dirty = true;
    }

    pub fn set_warning(&mut self, msg: String) {
        self.status_message = Some((msg, StatusLevel::Warning));
        self.dirty = true;
    }

}
