//! Seek bar configuration — fixed at construction, loadable from TOML.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seek bar config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable seek bar parameters.
///
/// Missing keys fall back to the defaults: range `[-100, 100]`, and zero for
/// the knob radius, knob margin and label text size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SeekBarConfig {
    /// Value at the left edge. Zero or negative by convention.
    pub min_value: f32,
    /// Value at the right edge. Zero or positive by convention.
    pub max_value: f32,
    /// Knob radius in pixels.
    pub knob_radius: f32,
    /// Gap between the knob and the track edge, in pixels.
    pub knob_margin: f32,
    /// Label text size in pixels.
    pub label_text_size: f32,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            min_value: -100.0,
            max_value: 100.0,
            knob_radius: 0.0,
            knob_margin: 0.0,
            label_text_size: 0.0,
        }
    }
}

impl SeekBarConfig {
    /// Knob radius plus margin: the distance from the knob center to the
    /// track end, and the width of the dead zone at each surface edge.
    pub fn inset(&self) -> f32 {
        self.knob_radius + self.knob_margin
    }

    /// Full track height.
    pub fn track_height(&self) -> f32 {
        self.inset() * 2.0
    }

    /// Parse a config from a TOML table.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Report parameters that will produce a degenerate mapping.
    ///
    /// Construction never calls this; a seek bar accepts any parameters.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let fields = [
            ("min-value", self.min_value),
            ("max-value", self.max_value),
            ("knob-radius", self.knob_radius),
            ("knob-margin", self.knob_margin),
            ("label-text-size", self.label_text_size),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                warnings.push(ConfigWarning::NonFinite(name));
            }
        }

        if self.min_value > 0.0 {
            warnings.push(ConfigWarning::PositiveMin(self.min_value));
        }
        if self.max_value < 0.0 {
            warnings.push(ConfigWarning::NegativeMax(self.max_value));
        }
        if self.min_value == 0.0 {
            warnings.push(ConfigWarning::ZeroBound("min-value"));
        }
        if self.max_value == 0.0 {
            warnings.push(ConfigWarning::ZeroBound("max-value"));
        }

        for (name, v) in [
            ("knob-radius", self.knob_radius),
            ("knob-margin", self.knob_margin),
            ("label-text-size", self.label_text_size),
        ] {
            if v < 0.0 {
                warnings.push(ConfigWarning::NegativeSize(name, v));
            }
        }
        warnings
    }
}

/// A non-fatal configuration problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    NonFinite(&'static str),
    PositiveMin(f32),
    NegativeMax(f32),
    /// A zero bound divides by zero when mapping values to positions.
    ZeroBound(&'static str),
    NegativeSize(&'static str, f32),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NonFinite(name) => write!(f, "{name} is not a finite number"),
            ConfigWarning::PositiveMin(v) => write!(f, "min-value {v} is above zero"),
            ConfigWarning::NegativeMax(v) => write!(f, "max-value {v} is below zero"),
            ConfigWarning::ZeroBound(name) => {
                write!(f, "{name} is zero; values on that side are degenerate")
            }
            ConfigWarning::NegativeSize(name, v) => write!(f, "{name} {v} is negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SeekBarConfig::default();
        assert_eq!(cfg.min_value, -100.0);
        assert_eq!(cfg.max_value, 100.0);
        assert_eq!(cfg.knob_radius, 0.0);
        assert_eq!(cfg.knob_margin, 0.0);
        assert_eq!(cfg.label_text_size, 0.0);
        assert_eq!(cfg.track_height(), 0.0);
    }

    #[test]
    fn track_height_is_twice_inset() {
        let cfg = SeekBarConfig {
            knob_radius: 20.0,
            knob_margin: 5.0,
            ..Default::default()
        };
        assert_eq!(cfg.inset(), 25.0);
        assert_eq!(cfg.track_height(), 50.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = SeekBarConfig::from_toml_str("knob-radius = 12.5\nmax-value = 50.0\n").unwrap();
        assert_eq!(cfg.knob_radius, 12.5);
        assert_eq!(cfg.max_value, 50.0);
        assert_eq!(cfg.min_value, -100.0);
        assert_eq!(cfg.knob_margin, 0.0);
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = SeekBarConfig::from_toml_str("knob-radius = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SeekBarConfig::load(Path::new("/nonexistent/seekbar.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/seekbar.toml"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seekbar.toml");
        std::fs::write(&path, "min-value = -10.0\nknob-margin = 4.0\n").unwrap();

        let cfg = SeekBarConfig::load(&path).unwrap();
        assert_eq!(cfg.min_value, -10.0);
        assert_eq!(cfg.knob_margin, 4.0);
    }

    #[test]
    fn default_config_has_no_range_warnings() {
        assert!(SeekBarConfig::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_degenerate_bounds() {
        let cfg = SeekBarConfig {
            min_value: 5.0,
            max_value: 0.0,
            knob_radius: -1.0,
            ..Default::default()
        };
        let warnings = cfg.validate();
        assert!(warnings.contains(&ConfigWarning::PositiveMin(5.0)));
        assert!(warnings.contains(&ConfigWarning::ZeroBound("max-value")));
        assert!(warnings.contains(&ConfigWarning::NegativeSize("knob-radius", -1.0)));
        assert!(!warnings.contains(&ConfigWarning::ZeroBound("min-value")));
    }

    #[test]
    fn validate_flags_non_finite() {
        let cfg = SeekBarConfig {
            max_value: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), vec![ConfigWarning::NonFinite("max-value")]);
    }
}
