use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;

/// CSS reference density: 96 dots per inch is scale 1.0.
pub const REFERENCE_DPI: f32 = 96.0;

/// Logical drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or non-finite extents are treated as zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { width: sane(width), height: sane(height) }
    }

    /// Like `new`, but rejects negative or non-finite extents instead of
    /// clamping them. Zero is accepted.
    pub fn checked(width: f32, height: f32) -> Result<Self, EngineError> {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if ok(width) && ok(height) {
            Ok(Self { width, height })
        } else {
            Err(EngineError::InvalidViewport { width, height })
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing store for this viewport at `dpi`.
    pub fn backing(&self, dpi: f32) -> BackingSize {
        BackingSize::new(*self, dpi)
    }
}

/// Physical canvas size plus the context scale that keeps logical drawing
/// correct on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
    /// Factor the 2D context is pre-scaled by (`dpi / 96`).
    pub scale: f32,
}

impl BackingSize {
    /// `ceil(logical × dpi / 96)` per axis.
    pub fn new(viewport: Viewport, dpi: f32) -> Self {
        let scale = if dpi.is_finite() && dpi > 0.0 { dpi / REFERENCE_DPI } else { 1.0 };
        Self {
            width: (viewport.width * scale).ceil() as u32,
            height: (viewport.height * scale).ceil() as u32,
            scale,
        }
    }
}
