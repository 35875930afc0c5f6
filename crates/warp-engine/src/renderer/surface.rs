//! Drawing surface contract.
//!
//! Simulators only ever need three primitives: stroke a line, composite a
//! translucent fill over what is already there (`fade`, which is what leaves
//! motion trails), and wipe to an opaque colour (`clear`). Hosts implement
//! this for a real canvas; `DrawList` records it for tests and buffer export.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::viewport::Viewport;

/// RGBA colour, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Neutral grey at `level` (0 = black, 1 = white). Matches HSB with zero
    /// saturation and brightness `level`.
    pub fn gray(level: f32, a: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self { r: l, g: l, b: l, a: a.clamp(0.0, 1.0) }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas style setters.
    pub fn to_css(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({},{},{},{})", c(self.r), c(self.g), c(self.b), self.a.clamp(0.0, 1.0))
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How new pixels combine with the existing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard source-over alpha blending.
    #[default]
    Alpha,
    /// Multiply source with destination.
    Multiply,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name.
    pub fn composite_op(self) -> &'static str {
        match self {
            BlendMode::Alpha => "source-over",
            BlendMode::Multiply => "multiply",
        }
    }
}

/// A 2D target in logical (pre-DPI) units.
pub trait Surface {
    /// Logical width and height.
    fn size(&self) -> Vec2;

    /// Match a new logical viewport. Content is not preserved.
    fn resize(&mut self, viewport: Viewport);

    /// Composite operation for subsequent fills and strokes.
    fn set_blend(&mut self, mode: BlendMode);

    /// Composite `color` over the whole surface, keeping existing content
    /// underneath. With a low alpha this fades the previous frame.
    fn fade(&mut self, color: Color);

    /// Replace the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}
