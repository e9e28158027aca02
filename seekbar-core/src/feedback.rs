//! Grow/shrink knob feedback played on press and release.

use std::time::Duration;

/// Scale reached while the knob is held down.
pub const PRESSED_SCALE: f32 = 1.3;
/// Resting scale.
pub const RESTING_SCALE: f32 = 1.0;
/// Time taken to reach the target scale.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(300);

/// Linear scale animation. Retargeting starts from the current scale.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobFeedback {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl Default for KnobFeedback {
    fn default() -> Self {
        Self {
            from: RESTING_SCALE,
            to: RESTING_SCALE,
            elapsed: FEEDBACK_DURATION,
        }
    }
}

impl KnobFeedback {
    pub fn grow(&mut self) {
        self.retarget(PRESSED_SCALE);
    }

    pub fn shrink(&mut self) {
        self.retarget(RESTING_SCALE);
    }

    fn retarget(&mut self, to: f32) {
        self.from = self.scale();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    /// Step the animation. Returns true if the scale changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }
        let before = self.scale();
        self.elapsed = (self.elapsed + dt).min(FEEDBACK_DURATION);
        self.scale() != before
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= FEEDBACK_DURATION
    }

    /// Current scale factor.
    pub fn scale(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() / FEEDBACK_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * t.clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
