//! Drawing surface abstraction and paints.
//!
//! The seek bar never rasterizes anything itself; it issues draw calls
//! against a [`Surface`] supplied by the host. [`RecordingSurface`] keeps
//! the calls as a display list, which is what tests inspect.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Material light blue 400.
    pub const LIGHT_BLUE_400: Rgb = Rgb(0x29, 0xB6, 0xF6);
}

/// Fill style for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub anti_alias: bool,
    /// Text size in pixels. Ignored by shape calls.
    pub text_size: f32,
}

impl Paint {
    pub fn fill(color: Rgb) -> Self {
        Self {
            color,
            anti_alias: true,
            text_size: 0.0,
        }
    }

    pub fn text(color: Rgb, text_size: f32) -> Self {
        Self {
            color,
            anti_alias: true,
            text_size,
        }
    }
}

/// Colors for the three seek bar layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub track: Rgb,
    pub knob: Rgb,
    pub label: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            track: Rgb::LIGHT_BLUE_400,
            knob: Rgb::WHITE,
            label: Rgb::BLACK,
        }
    }
}

/// Measured extent of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

/// Something a seek bar can draw onto.
pub trait Surface {
    /// Fill a rounded rectangle. Edges are passed through unsorted.
    fn draw_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        corner_radius: f32,
        paint: &Paint,
    );

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Bounds `text` would occupy when drawn with `paint`.
    fn measure_text(&self, text: &str, paint: &Paint) -> TextBounds;

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &Paint);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        corner_radius: f32,
        paint: Paint,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        paint: Paint,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        paint: Paint,
    },
}

/// A surface that records draw calls instead of rasterizing them.
///
/// Text is measured as `0.5 × size` per character wide and `size` tall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn draw_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        corner_radius: f32,
        paint: &Paint,
    ) {
        self.commands.push(DrawCommand::RoundRect {
            left,
            top,
            right,
            bottom,
            corner_radius,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            paint: *paint,
        });
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> TextBounds {
        TextBounds {
            width: text.chars().count() as f32 * paint.text_size * 0.5,
            height: paint.text_size,
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            baseline,
            paint: *paint,
        });
    }
}
