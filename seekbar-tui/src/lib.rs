//! SeekBar TUI — terminal host screen for the seek bar widget
//!
//! Provides:
//! - A text field and a Set button that assign the seek bar's value
//! - Mouse press/drag/release forwarded to the seek bar as pointer input
//! - Cell rasterization of the seek bar's track, knob and label
//! - Observed-value readout in the status bar
//! - State persistence across restarts

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::{AppConfig, HostConfig};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
