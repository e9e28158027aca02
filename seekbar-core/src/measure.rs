//! Layout constraints handed down by the host.

/// How a [`MeasureSpec`] size constrains the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The host imposes no size.
    Unspecified,
    /// The result must be exactly the given size.
    Exactly,
    /// The result may be at most the given size.
    AtMost,
}

/// One axis of a layout constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    pub fn exactly(size: f32) -> Self {
        Self { mode: MeasureMode::Exactly, size }
    }

    pub fn at_most(size: f32) -> Self {
        Self { mode: MeasureMode::AtMost, size }
    }

    pub fn unspecified() -> Self {
        Self { mode: MeasureMode::Unspecified, size: 0.0 }
    }

    /// Default sizing: the constraint's size unless it is unspecified, in
    /// which case the minimum (zero) is used.
    pub fn resolve_default(self) -> f32 {
        match self.mode {
            MeasureMode::Unspecified => 0.0,
            MeasureMode::Exactly | MeasureMode::AtMost => self.size,
        }
    }
}

/// Measured surface size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}
