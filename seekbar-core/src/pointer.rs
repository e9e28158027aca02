//! Pointer input delivered by the host, in surface-local pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32) -> Self {
        Self { action: PointerAction::Down, x, y: 0.0 }
    }

    pub fn moved(x: f32) -> Self {
        Self { action: PointerAction::Move, x, y: 0.0 }
    }

    pub fn up(x: f32) -> Self {
        Self { action: PointerAction::Up, x, y: 0.0 }
    }
}

/// Touch phase of a seek bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    Pressed,
    Dragging,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Outside the interactive band; nothing changed.
    Ignored,
    Pressed,
    Released,
    /// The knob moved and the value became the contained one.
    Moved(f32),
}

impl PointerOutcome {
    pub fn is_ignored(self) -> bool {
        matches!(self, PointerOutcome::Ignored)
    }
}
