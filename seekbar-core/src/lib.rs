//! SeekBar core — a custom-drawn, center-anchored seek bar.
//!
//! Provides:
//! - Configuration with defaults and TOML loading
//! - Pointer position ↔ value mapping
//! - A press/drag/release state machine with grow/shrink knob feedback
//! - Rendering onto any [`Surface`] implementation
//! - A single-slot value observer

pub mod config;
pub mod feedback;
pub mod geometry;
pub mod measure;
pub mod pointer;
pub mod seek_bar;
pub mod surface;

pub use config::{ConfigError, ConfigWarning, SeekBarConfig};
pub use feedback::KnobFeedback;
pub use geometry::{Geometry, TrackEdges};
pub use measure::{MeasureMode, MeasureSpec, Size};
pub use pointer::{PointerAction, PointerEvent, PointerOutcome, PointerPhase};
pub use seek_bar::{SeekBar, SeekListener};
pub use surface::{DrawCommand, Paint, Palette, RecordingSurface, Rgb, Surface, TextBounds};
