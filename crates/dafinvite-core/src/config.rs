//! Editor configuration: layout limits and history depth.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default number of undo steps kept by an editor session.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Numeric bounds applied by layout operations.
///
/// Positions are canvas percentages, sizes are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutLimits {
    /// Lower bound for dragged positions.
    #[serde(default = "default_drag_min")]
    pub drag_min: f64,
    /// Upper bound for dragged positions. Below 100 so a default-sized
    /// element cannot be dragged off the card edge.
    #[serde(default = "default_drag_max")]
    pub drag_max: f64,
    #[serde(default = "default_snap_min")]
    pub snap_min: f64,
    #[serde(default = "default_snap_max")]
    pub snap_max: f64,
    /// Bounds for explicit moves.
    #[serde(default = "default_position_min")]
    pub position_min: f64,
    #[serde(default = "default_position_max")]
    pub position_max: f64,
    /// Horizontal position used by center-all.
    #[serde(default = "default_center_x")]
    pub center_x: f64,
    /// Smallest width or height an element can be resized to.
    #[serde(default = "default_min_element_size")]
    pub min_element_size: f64,
}

fn default_drag_min() -> f64 {
    0.0
}

fn default_drag_max() -> f64 {
    85.0
}

fn default_snap_min() -> f64 {
    5.0
}

fn default_snap_max() -> f64 {
    85.0
}

fn default_position_min() -> f64 {
    0.0
}

fn default_position_max() -> f64 {
    100.0
}

fn default_center_x() -> f64 {
    50.0
}

fn default_min_element_size() -> f64 {
    1.0
}

impl LayoutLimits {
    /// Check that every bound is finite and every range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("dragMin", self.drag_min),
            ("dragMax", self.drag_max),
            ("snapMin", self.snap_min),
            ("snapMax", self.snap_max),
            ("positionMin", self.position_min),
            ("positionMax", self.position_max),
            ("centerX", self.center_x),
            ("minElementSize", self.min_element_size),
        ];
        if let Some((name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{} must be finite, got {}", name, value)));
        }

        let ranges = [
            ("drag", self.drag_min, self.drag_max),
            ("snap", self.snap_min, self.snap_max),
            ("position", self.position_min, self.position_max),
        ];
        if let Some((name, min, max)) = ranges.iter().find(|(_, min, max)| min > max) {
            return Err(ConfigError::Invalid(format!(
                "{} range is inverted: min {} > max {}",
                name, min, max
            )));
        }

        if self.min_element_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "minElementSize must be positive, got {}",
                self.min_element_size
            )));
        }
        Ok(())
    }
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            drag_min: default_drag_min(),
            drag_max: default_drag_max(),
            snap_min: default_snap_min(),
            snap_max: default_snap_max(),
            position_min: default_position_min(),
            position_max: default_position_max(),
            center_x: default_center_x(),
            min_element_size: default_min_element_size(),
        }
    }
}

/// Configuration for an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    #[serde(default)]
    pub limits: LayoutLimits,
    /// Maximum number of undo steps.
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            limits: LayoutLimits::default(),
            history_depth: default_history_depth(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from JSON. Missing keys take their defaults.
    /// Limits that are not finite or whose ranges are inverted are rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Failed to load config from {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.history_depth, 50);
        assert_eq!(config.limits.drag_max, 85.0);
        assert_eq!(config.limits.snap_min, 5.0);
        assert_eq!(config.limits.center_x, 50.0);
        assert_eq!(config.limits.min_element_size, 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{"limits": {"dragMax": 90}}"#).unwrap();
        assert_eq!(config.limits.drag_max, 90.0);
        assert_eq!(config.limits.drag_min, 0.0);
        assert_eq!(config.history_depth, DEFAULT_HISTORY_DEPTH);
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            EditorConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let result = EditorConfig::from_json(r#"{"limits": {"dragMin": 90}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = EditorConfig::from_json(r#"{"limits": {"snapMin": 50, "snapMax": 10}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = EditorConfig::from_json(r#"{"limits": {"minElementSize": 0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_limits_rejected() {
        let limits = LayoutLimits {
            position_max: f64::NAN,
            ..LayoutLimits::default()
        };
        assert!(matches!(limits.validate(), Err(ConfigError::Invalid(_))));

        let limits = LayoutLimits {
            center_x: f64::INFINITY,
            ..LayoutLimits::default()
        };
        assert!(matches!(limits.validate(), Err(ConfigError::Invalid(_))));
        assert!(LayoutLimits::default().validate().is_ok());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inverted.json");
        std::fs::write(&path, r#"{"limits": {"dragMin": 90}}"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(ConfigError::Invalid(_))));
        assert_eq!(EditorConfig::load_or_default(&path), EditorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"historyDepth": 10}}"#).unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.history_depth, 10);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(EditorConfig::load_or_default(&missing), EditorConfig::default());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[1, 2").unwrap();
        assert_eq!(EditorConfig::load_or_default(&bad), EditorConfig::default());
        assert!(matches!(EditorConfig::load(&missing), Err(ConfigError::Io(_))));
    }
}
