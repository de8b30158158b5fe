//! Board configuration, with defaults matching the shipped viewer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraParams;
use crate::error::ConfigError;
use crate::face::{ColorStrategy, DisplayParams};
use crate::palette::{PalettePolicy, PaletteSource};

/// Tunables for a coloring board.
///
/// Every field has a default, so a JSON document only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Frames after a press within which a release counts as a tap.
    pub debounce_frames: u64,
    /// Camera rotation per second of dragging, in degrees per axis.
    pub rotation_step_deg: f64,
    /// Exploded-view placement of faces.
    pub display: DisplayParams,
    /// How recolors are stored on faces.
    pub color_strategy: ColorStrategy,
    /// How arity classes pick their initial colors.
    pub palette_policy: PalettePolicy,
    /// The color table initial colors are drawn from.
    pub palette_source: PaletteSource,
    /// Collision category bits of face bodies.
    pub collide_mask: u32,
    /// Camera rig parameters.
    pub camera: CameraParams,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            debounce_frames: 7,
            rotation_step_deg: 180.0,
            display: DisplayParams::default(),
            color_strategy: ColorStrategy::default(),
            palette_policy: PalettePolicy::default(),
            palette_source: PaletteSource::default(),
            collide_mask: 1,
            camera: CameraParams::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] for malformed JSON or
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Format)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any error
    /// of [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_owned()));
        self.display.validate()?;
        if !self.rotation_step_deg.is_finite() {
            return invalid("rotation_step_deg must be finite");
        }
        let cam = &self.camera;
        if !(cam.distance > 0.0 && cam.aspect > 0.0) {
            return invalid("camera.distance and camera.aspect must be positive");
        }
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 180.0) {
            return invalid("camera.fov_deg must be within (0, 180)");
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return invalid("camera clip planes must satisfy 0 < near < far");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BoardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.debounce_frames, 7);
        assert_eq!(config.color_strategy, ColorStrategy::VertexColors);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = BoardConfig::from_json_str(
            r#"{"rotation_step_deg": 90, "color_strategy": "tint",
                "palette_policy": "random", "display": {"face_scale": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(config.rotation_step_deg, 90.0);
        assert_eq!(config.color_strategy, ColorStrategy::Tint);
        assert_eq!(config.palette_policy, PalettePolicy::Random);
        assert_eq!(config.display.face_scale, 1.0);
        assert_eq!(config.display.face_roll_deg, -30.0);
        assert_eq!(config.debounce_frames, 7);
    }

    #[test]
    fn rejects_zero_scale() {
        assert!(matches!(
            BoardConfig::from_json_str(r#"{"display": {"face_scale": 0}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_bad_clip_planes() {
        assert!(matches!(
            BoardConfig::from_json_str(r#"{"camera": {"near": 10, "far": 5}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(matches!(
            BoardConfig::from_json_str(r#"{"color_strategy": "paint"}"#),
            Err(ConfigError::Format(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, r#"{"debounce_frames": 3}"#).unwrap();
        assert_eq!(BoardConfig::load(&path).unwrap().debounce_frames, 3);
        assert!(matches!(
            BoardConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
