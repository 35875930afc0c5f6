use glam::Vec2;

use crate::extensions::easing::{ease_vec2, Easing};
use crate::geometry::Shape;

/// Where the swarm is in its shape cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphPhase {
    Steady(Shape),
    Morphing { from: Shape, to: Shape, frame: u32 },
}

impl MorphPhase {
    pub fn new(shape: Shape) -> Self {
        MorphPhase::Steady(shape)
    }

    /// Shape the swarm is settled on, or is leaving.
    pub fn current(&self) -> Shape {
        match *self {
            MorphPhase::Steady(shape) => shape,
            MorphPhase::Morphing { from, .. } => from,
        }
    }

    pub fn is_morphing(&self) -> bool {
        matches!(self, MorphPhase::Morphing { .. })
    }

    /// Start morphing to the next shape. No-op while a morph is running.
    pub fn begin(&mut self) -> bool {
        match *self {
            MorphPhase::Steady(shape) => {
                *self = MorphPhase::Morphing { from: shape, to: shape.next(), frame: 0 };
                true
            }
            MorphPhase::Morphing { .. } => false,
        }
    }

    /// Count one frame. Returns the new shape when the morph completes.
    pub fn advance(&mut self, duration: u32) -> Option<Shape> {
        if let MorphPhase::Morphing { to, frame, .. } = self {
            *frame += 1;
            if *frame >= duration {
                let done = *to;
                *self = MorphPhase::Steady(done);
                return Some(done);
            }
        }
        None
    }

    /// Target for the particle at `angle` on a shape of `radius`.
    pub fn target(&self, angle: f32, radius: f32, duration: u32, easing: Easing) -> Vec2 {
        match *self {
            MorphPhase::Steady(shape) => shape.boundary_point(angle, radius),
            MorphPhase::Morphing { from, to, frame } => {
                let t = frame as f32 / duration.max(1) as f32;
                ease_vec2(
                    from.boundary_point(angle, radius),
                    to.boundary_point(angle, radius),
                    t,
                    easing,
                )
            }
        }
    }
}
