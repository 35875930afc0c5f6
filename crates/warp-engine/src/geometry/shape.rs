//! Parametric shape boundaries. Pure math, no engine state.
//!
//! Every function maps an angle to a point on a closed outline centred on
//! the local origin. Callers translate to world space. All outlines are
//! 2π-periodic in `angle`.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Outline a morph swarm can settle on. Cycles Circle → Square → Triangle → Star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
    Star,
}

impl Shape {
    pub const COUNT: usize = 4;
    pub const ALL: [Shape; Self::COUNT] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Star];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape at `index mod 4`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The next shape in the cycle (Star wraps to Circle).
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Point on this shape's outline at `angle`, scaled to `radius`.
    pub fn boundary_point(self, angle: f32, radius: f32) -> Vec2 {
        boundary_point(self, angle, radius)
    }
}

/// Point on `shape`'s outline at `angle` for a shape of size `radius`.
pub fn boundary_point(shape: Shape, angle: f32, radius: f32) -> Vec2 {
    match shape {
        Shape::Circle => circle_point(angle, radius),
        Shape::Square => square_point(angle, radius),
        Shape::Triangle => triangle_point(angle, radius),
        Shape::Star => star_point(angle, radius),
    }
}

pub fn circle_point(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}

/// Axis-aligned square with half-side `radius`.
///
/// The angle is offset by 45° and projected through its tangent; whichever of
/// x/y would leave the square is pinned to the edge, so the point is always on
/// the perimeter. `signum` never returns 0, which keeps the exact-vertical
/// case on an edge too.
pub fn square_point(angle: f32, radius: f32) -> Vec2 {
    let a = (angle + FRAC_PI_4).rem_euclid(TAU);
    let t = a.tan();
    let side = a.cos().signum();

    let mut x = radius * side;
    let mut y = radius * t * side;
    if y.abs() > radius || !y.is_finite() {
        let sy = if y.is_finite() { y.signum() } else { a.sin().signum() };
        y = radius * sy;
        x = radius / t * sy;
    }
    Vec2::new(x, y)
}

/// Equilateral triangle inscribed in a circle of `radius`.
pub fn triangle_point(angle: f32, radius: f32) -> Vec2 {
    const SIDE_ARC: f32 = TAU / 3.0;

    let a = (angle - FRAC_PI_2).rem_euclid(TAU);
    // Clamp guards rounding of `a` just below TAU up to a fourth side.
    let side = ((a / SIDE_ARC) as usize).min(2);
    let along = (a - side as f32 * SIDE_ARC) / SIDE_ARC;

    let p1 = polar(side as f32 * SIDE_ARC, radius);
    let p2 = polar((side + 1) as f32 * SIDE_ARC, radius);
    p1.lerp(p2, along.clamp(0.0, 1.0))
}

/// Five-point star: outer tips at `radius`, inner notches at half of it.
pub fn star_point(angle: f32, radius: f32) -> Vec2 {
    const POINTS: usize = 5;
    const SEGMENTS: usize = POINTS * 2;
    const STEP: f32 = TAU / SEGMENTS as f32;

    let outer = radius;
    let inner = radius * 0.5;

    let a = (angle - FRAC_PI_2).rem_euclid(TAU);
    let segment = ((a / STEP) as usize).min(SEGMENTS - 1);
    let start = segment as f32 * STEP;

    // Even segments run tip → notch, odd ones notch → tip.
    let (r1, r2) = if segment % 2 == 0 { (outer, inner) } else { (inner, outer) };
    let p1 = polar(start, r1);
    let p2 = polar(start + STEP, r2);
    p1.lerp(p2, ((a - start) / STEP).clamp(0.0, 1.0))
}

fn polar(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * radius
}
