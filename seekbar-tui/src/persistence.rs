//! Host state persistence — JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Focus};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Last value assigned to or dragged on the seek bar.
    pub last_value: f32,
    pub input_text: String,
    pub focus: Focus,
}

/// `<config dir>/seekbar/state.json`, or `./seekbar/state.json` when the
/// platform has no config dir.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("seekbar")
        .join("state.json")
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState. A non-finite value is stored as
/// zero; JSON has no spelling for it.
pub fn extract(app: &AppState) -> PersistedState {
    let value = app.seek_bar.value();
    PersistedState {
        last_value: if value.is_finite() { value } else { 0.0 },
        input_text: app.input.clone(),
        focus: app.focus,
    }
}

/// Apply persisted state to AppState. A non-zero value is re-assigned, which
/// notifies the seek bar's listener like any other assignment.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.input = state.input_text;
    app.focus = state.focus;
    if state.last_value != 0.0 && state.last_value.is_finite() {
        app.seek_bar.set_value(state.last_value);
    }
}
