//! Host configuration — a TOML file with `[seek-bar]` and `[host]` tables.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use seekbar_core::SeekBarConfig;

/// Terminal-specific settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HostConfig {
    /// Surface pixels per terminal column.
    pub px_per_column: f32,
    /// Surface pixels per terminal row.
    pub px_per_row: f32,
    /// Value step for Left/Right on a focused seek bar.
    pub nudge_step: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            px_per_column: 8.0,
            px_per_row: 16.0,
            nudge_step: 1.0,
        }
    }
}

/// Everything the host screen is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppConfig {
    pub seek_bar: SeekBarConfig,
    pub host: HostConfig,
}

impl Default for AppConfig {
    /// A seek bar sized for terminal cells: two rows tall with a readable
    /// label. A `[seek-bar]` table in a config file replaces it entirely,
    /// with missing keys taking the widget's own defaults.
    fn default() -> Self {
        Self {
            seek_bar: SeekBarConfig {
                knob_radius: 12.0,
                knob_margin: 4.0,
                label_text_size: 12.0,
                ..SeekBarConfig::default()
            },
            host: HostConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid seekbar config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Terminal rows needed to show the whole track.
    pub fn seek_bar_rows(&self) -> u16 {
        let rows = (self.seek_bar.track_height() / self.host.px_per_row).ceil();
        if rows.is_finite() && rows >= 1.0 {
            rows.min(u16::MAX as f32) as u16
        } else {
            1
        }
    }
}
