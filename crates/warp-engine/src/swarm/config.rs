use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;
use crate::extensions::easing::Easing;
use crate::geometry::Shape;

/// Smallest shape radius used, whatever the viewport.
pub const MIN_RADIUS: f32 = 1.0;

/// Tunables for the shape-morph swarm. Ranges are `(lo, hi)` pairs, written
/// as two-element arrays in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Number of particles (default: 1500).
    pub particle_count: usize,
    pub max_speed: (f32, f32),
    pub max_force: (f32, f32),
    pub size: (f32, f32),
    /// Frames a morph takes (default: 45).
    pub morph_frames: u32,
    /// Seconds between morph attempts (default: 0.8).
    pub cycle_interval: f32,
    /// Shape radius as a fraction of the viewport's shorter side (default: 0.3).
    pub radius_fraction: f32,
    /// Alpha of the black wash composited over each frame (default: 0.25).
    pub fade_alpha: f32,
    pub easing: Easing,
    pub start_shape: Shape,
    /// Stroke brightness at rest and at full speed.
    pub brightness: (f32, f32),
    /// Stroke alpha at rest and at full speed.
    pub opacity: (f32, f32),
    /// Stroke width as a fraction of particle size, at rest and at full speed.
    pub width_fraction: (f32, f32),
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particle_count: 1500,
            max_speed: (1.0, 8.0),
            max_force: (0.05, 0.9),
            size: (0.5, 4.5),
            morph_frames: 45,
            cycle_interval: 0.8,
            radius_fraction: 0.3,
            fade_alpha: 0.25,
            easing: Easing::CubicInOut,
            start_shape: Shape::Circle,
            brightness: (0.6, 1.0),
            opacity: (0.1, 0.8),
            width_fraction: (0.5, 1.0),
        }
    }
}

impl SwarmConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Shape radius for a `width × height` viewport, never below `MIN_RADIUS`.
    pub fn radius_for(&self, width: f32, height: f32) -> f32 {
        let r = width.min(height) * self.radius_fraction;
        if r.is_finite() { r.max(MIN_RADIUS) } else { MIN_RADIUS }
    }
}
