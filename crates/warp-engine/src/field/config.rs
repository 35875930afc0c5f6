use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;
use crate::renderer::surface::{BlendMode, Color};

/// Tunables for the orbital star field. Missing JSON fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of stars spawned at init (default: 2500).
    pub star_count: usize,
    /// Base orbit size the radius bands are derived from (default: 305).
    pub max_orbit: f32,
    /// Rotation time units per second (default: 20, one unit per 50 ms).
    pub time_scale: f32,
    /// First countdown value shown at mount (default: 5).
    pub countdown_start: u32,
    /// Seconds between countdown ticks (default: 1.0).
    pub countdown_tick: f32,
    /// Seconds spent expanding before the return starts (default: 1.5).
    pub expand_dwell: f32,
    /// Seconds spent returning before the sequence completes (default: 1.0).
    pub return_dwell: f32,
    /// Alpha of the black wash composited over each frame (default: 0.2).
    pub fade_alpha: f32,
    pub star_color: Color,
    /// Composite mode for the fade and the strokes (default: alpha).
    /// Multiply over the black wash turns white strokes black.
    pub blend: BlendMode,
    /// Pointer distance from centre that collapses the field (default: 127.5).
    pub hover_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: 2500,
            max_orbit: 305.0,
            time_scale: 20.0,
            countdown_start: 5,
            countdown_tick: 1.0,
            expand_dwell: 1.5,
            return_dwell: 1.0,
            fade_alpha: 0.2,
            star_color: Color::WHITE,
            blend: BlendMode::Alpha,
            hover_radius: 127.5,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = FieldConfig::from_json(r#"{ "star_count": 12, "blend": "multiply" }"#).unwrap();
        assert_eq!(cfg.star_count, 12);
        assert_eq!(cfg.blend, BlendMode::Multiply);
        assert_eq!(FieldConfig::default().blend, BlendMode::Alpha);
        assert_eq!(cfg.max_orbit, 305.0);
        assert_eq!(cfg.countdown_start, 5);
        assert_eq!(cfg.star_color, Color::WHITE);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = FieldConfig::from_json(r#"{ "star_count": "many" }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
