//! Input dispatch — global keys → focused control; mouse → hit-tested control.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::trace;

use seekbar_core::PointerEvent;

use crate::app::{AppState, Focus};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }
    app.mark_dirty();

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.prev();
            } else {
                app.focus = app.focus.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    // 2. Focused control.
    match app.focus {
        Focus::TextField => handle_text_field_key(app, key),
        Focus::Button => handle_button_key(app, key),
        Focus::SeekBar => handle_seek_bar_key(app, key),
    }
}

fn handle_text_field_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => app.input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_button_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_input(),
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        _ => {}
    }
}

fn handle_seek_bar_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1.0),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1.0),
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        _ => {}
    }
}

/// Handle a mouse event.
///
/// A left press on the seek bar starts a drag; drag and release events are
/// then forwarded wherever the pointer is, and the seek bar decides whether
/// they fall inside its band.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let at = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.mark_dirty();
            if app.layout.seek_bar.contains(at) {
                app.focus = Focus::SeekBar;
                app.dragging = true;
                app.pointer(PointerEvent::down(0.0), mouse.column, mouse.row);
            } else if app.layout.button.contains(at) {
                app.focus = Focus::Button;
                app.submit_input();
            } else if app.layout.input.contains(at) {
                app.focus = Focus::TextField;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if app.dragging => {
            let outcome = app.pointer(PointerEvent::moved(0.0), mouse.column, mouse.row);
            trace!(column = mouse.column, ?outcome, "drag");
        }
        MouseEventKind::Up(MouseButton::Left) if app.dragging => {
            app.dragging = false;
            app.pointer(PointerEvent::up(0.0), mouse.column, mouse.row);
        }
        _ => {}
    }
}
