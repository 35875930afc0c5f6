use glam::Vec2;

use crate::api::types::FieldPhase;
use crate::core::rng::Rng;
use crate::geometry::rotate_around;
use crate::renderer::surface::Color;
use crate::systems::sampling;

/// Band spacing between consecutive expanse rows.
const EXPANSE_STEP: f32 = -10.0;
/// Number of distinct expanse rows before the pattern repeats.
const EXPANSE_ROWS: usize = 100;
/// Fraction of `max_orbit` beyond which a star's collapsed position is pushed out.
const HOVER_SPILL: f32 = 0.7;

/// One orbiting star. Positions are in unrotated space: the star sits on
/// the vertical through the centre and only its y moves; rotation is
/// applied at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    /// Resting y. Orbit pulls toward it and the return phase settles on it.
    pub y_origin: f32,
    /// Collapsed y while hovering.
    pub hover_pos: f32,
    /// Expanded y, banded by index.
    pub expanse_pos: f32,
    pub start_rotation: f32,
    /// Radians per time unit.
    pub speed: f32,
    pub rotation: f32,
    pub prev_rotation: f32,
    pub size: f32,
    pub color: Color,
}

impl Star {
    pub fn spawn(index: usize, center: Vec2, max_orbit: f32, color: Color, rng: &mut Rng) -> Self {
        let orbital = sampling::orbital_radius(rng, max_orbit);
        let speed = sampling::angular_speed(rng);
        let start_rotation = sampling::start_rotation(rng);
        let size = sampling::star_size(rng);

        let y = center.y + orbital;
        let pos = Vec2::new(center.x, y);
        let hover_pos = center.y + max_orbit / 2.0 + (orbital - HOVER_SPILL * max_orbit).max(0.0);
        let row = (index % EXPANSE_ROWS) as f32;
        let expanse_pos = center.y + row * EXPANSE_STEP + sampling::expanse_jitter(rng);

        Self {
            pos,
            prev_pos: pos,
            y_origin: y,
            hover_pos,
            expanse_pos,
            start_rotation,
            speed,
            rotation: 0.0,
            prev_rotation: start_rotation,
            size,
            color,
        }
    }

    /// Advance one frame at time `t` (in time units) under `phase`.
    pub fn update(&mut self, t: f32, phase: FieldPhase) {
        self.rotation = self.start_rotation + t * self.speed * phase.speed_factor();

        let y = self.pos.y;
        match phase {
            FieldPhase::Orbiting | FieldPhase::Done => {
                if y > self.y_origin {
                    self.pos.y -= 2.5;
                }
                if y < self.y_origin - 4.0 {
                    self.pos.y += (self.y_origin - y) / 10.0;
                }
            }
            FieldPhase::Hovering => {
                if y > self.hover_pos {
                    self.pos.y += (self.hover_pos - y) / 5.0;
                }
                if y < self.hover_pos - 4.0 {
                    self.pos.y += 2.5;
                }
            }
            FieldPhase::Expanding => {
                if y > self.expanse_pos {
                    self.pos.y += (self.expanse_pos - y) / 80.0;
                }
            }
            FieldPhase::Returning => {
                if (y - self.y_origin).abs() > 2.0 {
                    self.pos.y += (self.y_origin - y) / 50.0;
                } else {
                    self.pos.y = self.y_origin;
                }
            }
        }
    }

    /// Screen-space segment from last drawn position to the current one.
    /// Rotations are negated to match a canvas `rotate(rotation)` transform.
    pub fn trail(&self, center: Vec2) -> (Vec2, Vec2) {
        (
            rotate_around(center, self.prev_pos, -self.prev_rotation),
            rotate_around(center, self.pos, -self.rotation),
        )
    }

    /// Remember the drawn state as the start of the next trail.
    pub fn commit(&mut self) {
        self.prev_pos = self.pos;
        self.prev_rotation = self.rotation;
    }
}
