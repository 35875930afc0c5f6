// extensions/easing.rs
//
// Pure easing curves for morph interpolation.
// No dependencies on the simulators, just math.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Easing curve selectable from config (`"cubic_in_out"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start and end.
    QuadInOut,
    /// Slow start.
    CubicIn,
    /// Slow end.
    CubicOut,
    /// Stronger slow start and end. The swarm morph default.
    #[default]
    CubicInOut,
    /// Sine wave easing (smooth).
    SineInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1]. Every curve maps 0 to 0 and
    /// 1 to 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: Vec2, b: Vec2, t: f32, easing: Easing) -> Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}

/// Map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamped to the
/// output range. A degenerate input range maps to `out_lo`.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let span = in_hi - in_lo;
    if !(span.abs() > f32::EPSILON) || !value.is_finite() {
        return out_lo;
    }
    let t = ((value - in_lo) / span).clamp(0.0, 1.0);
    lerp(out_lo, out_hi, t)
}
