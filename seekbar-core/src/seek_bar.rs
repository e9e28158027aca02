//! The seek bar widget — single-owner, UI-thread only.
//!
//! Zero sits at the horizontal center. The track is drawn from the center
//! out to the knob, and a label with the integer part of the value rides on
//! the knob. The host owns the widget and forwards layout, drawing and
//! pointer input to it.

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::SeekBarConfig;
use crate::feedback::KnobFeedback;
use crate::geometry::{Geometry, TrackEdges};
use crate::measure::{MeasureMode, MeasureSpec, Size};
use crate::pointer::{PointerAction, PointerEvent, PointerOutcome, PointerPhase};
use crate::surface::{Paint, Palette, Surface};

/// Receives the seek bar's value whenever it changes.
pub trait SeekListener {
    fn on_seek(&mut self, value: f32);
}

impl<F: FnMut(f32)> SeekListener for F {
    fn on_seek(&mut self, value: f32) {
        self(value)
    }
}

/// Where the current knob position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnobSource {
    Value,
    Pointer,
}

pub struct SeekBar {
    config: SeekBarConfig,
    palette: Palette,
    value: f32,
    knob_x: f32,
    knob_source: KnobSource,
    label: String,
    size: Size,
    phase: PointerPhase,
    feedback: KnobFeedback,
    listener: Option<Box<dyn SeekListener>>,
    redraw_requested: bool,
}

impl fmt::Debug for SeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeekBar")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("knob_x", &self.knob_x)
            .field("label", &self.label)
            .field("size", &self.size)
            .field("phase", &self.phase)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl SeekBar {
    /// Create a seek bar at rest. Parameters are accepted as-is.
    pub fn new(config: SeekBarConfig) -> Self {
        Self {
            config,
            palette: Palette::default(),
            value: 0.0,
            knob_x: 0.0,
            knob_source: KnobSource::Value,
            label: label_for(0.0),
            size: Size::default(),
            phase: PointerPhase::Idle,
            feedback: KnobFeedback::default(),
            listener: None,
            redraw_requested: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Register the observer, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl SeekListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Assign a value programmatically.
    ///
    /// Updates the label from `value`, moves the knob to the position for
    /// `value`, requests a redraw and then notifies the listener. The
    /// listener receives the value read back from the new knob position,
    /// which differs from `value` by the knob inset (see [`crate::geometry`]).
    pub fn set_value(&mut self, value: f32) {
        let geometry = self.geometry();
        self.value = value;
        self.label = label_for(value);
        self.knob_x = geometry.position_from_value(value);
        self.knob_source = KnobSource::Value;
        self.redraw_requested = true;

        let reported = geometry.value_from_position(self.knob_x);
        debug!(value, knob_x = self.knob_x, reported, "seek bar value assigned");
        self.notify(reported);
    }

    /// Resolve the surface size from the host's constraints.
    ///
    /// An at-most height collapses to the track height; anything else uses
    /// default sizing.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = if height.mode == MeasureMode::AtMost {
            Size {
                width: width.size,
                height: self.config.track_height().trunc(),
            }
        } else {
            Size {
                width: width.resolve_default(),
                height: height.resolve_default(),
            }
        };

        if size != self.size {
            let width_changed = size.width != self.size.width;
            self.size = size;
            if width_changed && self.knob_source == KnobSource::Value {
                self.knob_x = self.geometry().position_from_value(self.value);
            }
            self.redraw_requested = true;
            trace!(width = size.width, height = size.height, "seek bar measured");
        }
        size
    }

    /// Draw track, knob and label, in that order. Does not change state.
    pub fn render(&self, surface: &mut dyn Surface) {
        let geometry = self.geometry();
        let track_height = self.config.track_height();
        let edges = geometry.track_edges(self.knob_x);
        surface.draw_round_rect(
            edges.left,
            0.0,
            edges.right,
            track_height,
            track_height / 2.0,
            &Paint::fill(self.palette.track),
        );

        let cy = geometry.knob_center_y();
        surface.draw_circle(
            self.knob_x,
            cy,
            self.config.knob_radius,
            &Paint::fill(self.palette.knob),
        );

        let text_paint = Paint::text(self.palette.label, self.config.label_text_size);
        let bounds = surface.measure_text(&self.label, &text_paint);
        surface.draw_text(
            &self.label,
            self.knob_x - bounds.width / 2.0,
            cy + bounds.height / 2.0,
            &text_paint,
        );
    }

    /// Feed one pointer event through the press/drag/release machine.
    ///
    /// Events outside the interactive band are dropped in every phase, so a
    /// drag that leaves the band leaves the knob where it last was.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> PointerOutcome {
        let geometry = self.geometry();
        if !geometry.in_band(event.x) {
            trace!(x = event.x, "pointer outside band");
            return PointerOutcome::Ignored;
        }

        match event.action {
            PointerAction::Down => {
                self.phase = PointerPhase::Pressed;
                self.feedback.grow();
                debug!(x = event.x, "seek bar pressed");
                PointerOutcome::Pressed
            }
            PointerAction::Up => {
                self.phase = PointerPhase::Idle;
                self.feedback.shrink();
                debug!(x = event.x, "seek bar released");
                PointerOutcome::Released
            }
            PointerAction::Move => {
                self.phase = PointerPhase::Dragging;
                self.knob_x = event.x;
                self.knob_source = KnobSource::Pointer;
                self.value = geometry.value_from_position(event.x);
                self.label = label_for(self.value);
                self.notify(self.value);
                self.redraw_requested = true;
                PointerOutcome::Moved(self.value)
            }
        }
    }

    /// Step the knob feedback animation.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let changed = self.feedback.advance(dt);
        if changed {
            self.redraw_requested = true;
        }
        changed
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn knob_position_x(&self) -> f32 {
        self.knob_x
    }

    pub fn display_label(&self) -> &str {
        &self.label
    }

    pub fn surface_width(&self) -> f32 {
        self.size.width
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    pub fn feedback_scale(&self) -> f32 {
        self.feedback.scale()
    }

    /// Mapping for the current surface width.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(&self.config, self.size.width)
    }

    pub fn track_edges(&self) -> TrackEdges {
        self.geometry().track_edges(self.knob_x)
    }

    fn notify(&mut self, value: f32) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_seek(value);
        }
    }
}

/// Integer part of `value`, truncated toward zero.
fn label_for(value: f32) -> String {
    (value as i32).to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface, Rgb};

    fn config() -> SeekBarConfig {
        SeekBarConfig {
            min_value: -100.0,
            max_value: 100.0,
            knob_radius: 20.0,
            knob_margin: 5.0,
            label_text_size: 10.0,
        }
    }

    fn measured(width: f32) -> SeekBar {
        let mut bar = SeekBar::new(config());
        bar.measure(MeasureSpec::exactly(width), MeasureSpec::at_most(200.0));
        bar
    }

    fn recorder(bar: &mut SeekBar) -> Rc<RefCell<Vec<f32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        bar.set_listener(move |v: f32| sink.borrow_mut().push(v));
        seen
    }

    #[test]
    fn starts_at_rest_and_centered() {
        let bar = measured(1000.0);
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.knob_position_x(), 500.0);
        assert_eq!(bar.display_label(), "0");
        assert_eq!(bar.phase(), PointerPhase::Idle);
    }

    #[test]
    fn at_most_height_collapses_to_track() {
        let mut bar = SeekBar::new(SeekBarConfig {
            knob_radius: 10.4,
            knob_margin: 2.0,
            ..Default::default()
        });
        let size = bar.measure(MeasureSpec::exactly(300.0), MeasureSpec::at_most(100.0));
        assert_eq!(size, Size { width: 300.0, height: 24.0 });
    }

    #[test]
    fn at_most_height_passes_width_through() {
        let mut bar = SeekBar::new(config());
        let width = MeasureSpec { mode: MeasureMode::Unspecified, size: 240.0 };
        let size = bar.measure(width, MeasureSpec::at_most(100.0));
        assert_eq!(size.width, 240.0);
        assert_eq!(bar.surface_width(), 240.0);

        let size = bar.measure(MeasureSpec::at_most(180.0), MeasureSpec::at_most(100.0));
        assert_eq!(size.width, 180.0);
    }

    #[test]
    fn other_height_modes_use_default_sizing() {
        let mut bar = SeekBar::new(config());
        let size = bar.measure(MeasureSpec::exactly(300.0), MeasureSpec::exactly(80.0));
        assert_eq!(size, Size { width: 300.0, height: 80.0 });

        let size = bar.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified());
        assert_eq!(size, Size { width: 0.0, height: 0.0 });
    }

    #[test]
    fn drag_updates_value_label_and_listener() {
        let mut bar = measured(1000.0);
        let seen = recorder(&mut bar);

        let outcome = bar.handle_pointer_event(PointerEvent::moved(750.0));
        assert_eq!(outcome, PointerOutcome::Moved(55.0));
        assert_eq!(bar.value(), 55.0);
        assert_eq!(bar.knob_position_x(), 750.0);
        assert_eq!(bar.display_label(), "55");
        assert_eq!(bar.phase(), PointerPhase::Dragging);
        assert_eq!(*seen.borrow(), vec![55.0]);
        assert!(bar.take_redraw_request());
    }

    #[test]
    fn out_of_band_move_is_dropped() {
        let mut bar = measured(1000.0);
        bar.handle_pointer_event(PointerEvent::moved(750.0));
        let seen = recorder(&mut bar);
        bar.take_redraw_request();

        assert!(bar.handle_pointer_event(PointerEvent::moved(10.0)).is_ignored());
        assert!(bar.handle_pointer_event(PointerEvent::moved(990.0)).is_ignored());
        assert_eq!(bar.value(), 55.0);
        assert_eq!(bar.knob_position_x(), 750.0);
        assert_eq!(bar.display_label(), "55");
        assert!(seen.borrow().is_empty());
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn set_value_reports_read_back_value() {
        let mut bar = measured(1000.0);
        let seen = recorder(&mut bar);

        bar.set_value(50.0);
        assert_eq!(bar.value(), 50.0);
        assert_eq!(bar.knob_position_x(), 750.0);
        assert_eq!(bar.display_label(), "50");
        // 100 × (750 - 500 + 25) / 500
        assert_eq!(*seen.borrow(), vec![55.0]);
    }

    #[test]
    fn set_value_negative() {
        let mut bar = measured(1000.0);
        let seen = recorder(&mut bar);

        bar.set_value(-50.0);
        assert_eq!(bar.knob_position_x(), 250.0);
        assert_eq!(bar.display_label(), "-50");
        assert_eq!(*seen.borrow(), vec![-55.0]);
    }

    #[test]
    fn set_value_zero_reports_zero() {
        let mut bar = measured(1000.0);
        let seen = recorder(&mut bar);
        bar.set_value(0.0);
        assert_eq!(bar.knob_position_x(), 500.0);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn label_truncates_toward_zero() {
        let mut bar = measured(1000.0);
        bar.set_value(42.9);
        assert_eq!(bar.display_label(), "42");
        bar.set_value(-42.9);
        assert_eq!(bar.display_label(), "-42");
        bar.set_value(-0.5);
        assert_eq!(bar.display_label(), "0");
    }

    #[test]
    fn listener_slot_is_last_write_wins() {
        let mut bar = measured(1000.0);
        let first = recorder(&mut bar);
        let second = recorder(&mut bar);

        bar.set_value(20.0);
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn press_and_release_play_feedback_without_value_change() {
        let mut bar = measured(1000.0);
        let seen = recorder(&mut bar);

        assert_eq!(bar.handle_pointer_event(PointerEvent::down(600.0)), PointerOutcome::Pressed);
        assert_eq!(bar.phase(), PointerPhase::Pressed);
        assert!(bar.advance(Duration::from_millis(300)));
        assert_eq!(bar.feedback_scale(), 1.3);

        assert_eq!(bar.handle_pointer_event(PointerEvent::up(600.0)), PointerOutcome::Released);
        assert_eq!(bar.phase(), PointerPhase::Idle);
        bar.advance(Duration::from_millis(300));
        assert_eq!(bar.feedback_scale(), 1.0);

        assert_eq!(bar.value(), 0.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn out_of_band_press_does_not_grow() {
        let mut bar = measured(1000.0);
        assert!(bar.handle_pointer_event(PointerEvent::down(5.0)).is_ignored());
        assert_eq!(bar.phase(), PointerPhase::Idle);
        assert!(!bar.advance(Duration::from_millis(100)));
    }

    #[test]
    fn resize_rederives_assigned_knob() {
        let mut bar = measured(1000.0);
        bar.set_value(50.0);
        bar.measure(MeasureSpec::exactly(400.0), MeasureSpec::at_most(200.0));
        assert_eq!(bar.knob_position_x(), 300.0);
        assert_eq!(bar.value(), 50.0);
    }

    #[test]
    fn resize_keeps_dragged_knob() {
        let mut bar = measured(1000.0);
        bar.handle_pointer_event(PointerEvent::moved(600.0));
        bar.measure(MeasureSpec::exactly(800.0), MeasureSpec::at_most(200.0));
        assert_eq!(bar.knob_position_x(), 600.0);
    }

    #[test]
    fn render_draws_track_knob_label_in_order() {
        let mut bar = measured(1000.0);
        bar.handle_pointer_event(PointerEvent::moved(750.0));

        let mut surface = RecordingSurface::new();
        bar.render(&mut surface);

        assert_eq!(surface.commands.len(), 3);
        match &surface.commands[0] {
            DrawCommand::RoundRect { left, top, right, bottom, corner_radius, paint } => {
                assert_eq!((*left, *top, *right, *bottom), (775.0, 0.0, 475.0, 50.0));
                assert!(*corner_radius >= 25.0);
                assert_eq!(paint.color, Rgb::LIGHT_BLUE_400);
            }
            other => panic!("expected track, got {other:?}"),
        }
        match &surface.commands[1] {
            DrawCommand::Circle { cx, cy, radius, paint } => {
                assert_eq!((*cx, *cy, *radius), (750.0, 25.0, 20.0));
                assert_eq!(paint.color, Rgb::WHITE);
            }
            other => panic!("expected knob, got {other:?}"),
        }
        match &surface.commands[2] {
            DrawCommand::Text { text, x, baseline, paint } => {
                // "55" at size 10 measures 10 × 10 on a recording surface.
                assert_eq!(text, "55");
                assert_eq!(*x, 745.0);
                assert_eq!(*baseline, 30.0);
                assert_eq!(paint.text_size, 10.0);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn render_is_idempotent() {
        let mut bar = measured(1000.0);
        bar.set_value(-30.0);

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        bar.render(&mut first);
        bar.render(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_palette() {
        let palette = Palette {
            track: Rgb(1, 2, 3),
            knob: Rgb(4, 5, 6),
            label: Rgb(7, 8, 9),
        };
        let bar = SeekBar::new(config()).with_palette(palette);
        let mut surface = RecordingSurface::new();
        bar.render(&mut surface);
        assert!(matches!(
            surface.commands[1],
            DrawCommand::Circle { paint, .. } if paint.color == Rgb(4, 5, 6)
        ));
    }
}
