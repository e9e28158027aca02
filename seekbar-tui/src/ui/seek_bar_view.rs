//! Seek bar rendered onto terminal cells.
//!
//! Each cell stands for a `px_per_column × px_per_row` block of surface
//! pixels. A cell takes a shape's color when the pixel at its center lies
//! inside the shape; text lands one character per cell.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use seekbar_core::{Paint, SeekBar, Surface, TextBounds};

use crate::config::HostConfig;
use crate::theme::to_color;

/// Ratatui widget drawing a [`SeekBar`] into its area.
pub struct SeekBarView<'a> {
    seek_bar: &'a SeekBar,
    px_per_column: f32,
    px_per_row: f32,
    background: Option<Color>,
}

impl<'a> SeekBarView<'a> {
    pub fn new(seek_bar: &'a SeekBar, host: &HostConfig) -> Self {
        Self {
            seek_bar,
            px_per_column: host.px_per_column,
            px_per_row: host.px_per_row,
            background: None,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

impl Widget for SeekBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(bg) = self.background {
            buf.set_style(area, Style::default().bg(bg));
        }
        let mut surface = CellSurface {
            buf,
            area,
            px_per_column: self.px_per_column,
            px_per_row: self.px_per_row,
            knob_scale: self.seek_bar.feedback_scale(),
        };
        self.seek_bar.render(&mut surface);
    }
}

/// A [`Surface`] over a region of a ratatui buffer.
struct CellSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    px_per_column: f32,
    px_per_row: f32,
    /// Press feedback applied to circles. Circles are bold while it is above 1.
    knob_scale: f32,
}

impl CellSurface<'_> {
    fn fill(&mut self, color: Color, modifier: Modifier, inside: impl Fn(f32, f32) -> bool) {
        for row in self.area.top()..self.area.bottom() {
            let y = (row - self.area.y) as f32 * self.px_per_row + self.px_per_row / 2.0;
            for col in self.area.left()..self.area.right() {
                let x = (col - self.area.x) as f32 * self.px_per_column + self.px_per_column / 2.0;
                if inside(x, y) {
                    if let Some(cell) = self.buf.cell_mut((col, row)) {
                        cell.set_bg(color);
                        cell.modifier.insert(modifier);
                    }
                }
            }
        }
    }

    /// Terminal column for surface x, if it falls inside the area.
    fn column_at(&self, x: f32) -> Option<u16> {
        let offset = (x / self.px_per_column).floor();
        if offset < 0.0 || offset >= self.area.width as f32 {
            return None;
        }
        Some(self.area.x + offset as u16)
    }

    fn row_at(&self, y: f32) -> Option<u16> {
        let offset = (y / self.px_per_row).floor();
        if offset < 0.0 || offset >= self.area.height as f32 {
            return None;
        }
        Some(self.area.y + offset as u16)
    }
}

impl Surface for CellSurface<'_> {
    fn draw_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        corner_radius: f32,
        paint: &Paint,
    ) {
        let (l, r) = (left.min(right), left.max(right));
        let (t, b) = (top.min(bottom), top.max(bottom));
        let radius = corner_radius.min((r - l) / 2.0).min((b - t) / 2.0).max(0.0);
        self.fill(to_color(paint.color), Modifier::empty(), |x, y| {
            rounded_rect_contains(l, t, r, b, radius, x, y)
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let radius = radius * self.knob_scale;
        let modifier = if self.knob_scale > 1.0 {
            Modifier::BOLD
        } else {
            Modifier::empty()
        };
        self.fill(to_color(paint.color), modifier, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= radius * radius
        });
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> TextBounds {
        if paint.text_size <= 0.0 {
            return TextBounds::default();
        }
        TextBounds {
            width: text.chars().count() as f32 * self.px_per_column,
            height: self.px_per_row,
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &Paint) {
        if paint.text_size <= 0.0 {
            return;
        }
        let Some(row) = self.row_at(baseline - self.px_per_row / 2.0) else {
            return;
        };
        let color = to_color(paint.color);
        for (i, ch) in text.chars().enumerate() {
            let char_x = x + i as f32 * self.px_per_column;
            if let Some(col) = self.column_at(char_x) {
                if let Some(cell) = self.buf.cell_mut((col, row)) {
                    cell.set_char(ch).set_fg(color);
                }
            }
        }
    }
}

/// Whether `(x, y)` lies in the sorted rectangle `[l, r] × [t, b]` with
/// corners rounded by `radius`.
fn rounded_rect_contains(l: f32, t: f32, r: f32, b: f32, radius: f32, x: f32, y: f32) -> bool {
    if x < l || x > r || y < t || y > b {
        return false;
    }
    let nx = x.clamp(l + radius, r - radius);
    let ny = y.clamp(t + radius, b - radius);
    let (dx, dy) = (x - nx, y - ny);
    dx * dx + dy * dy <= radius * radius
}
