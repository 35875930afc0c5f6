use glam::Vec2;

use crate::core::rng::Rng;
use crate::extensions::easing::map_range;
use crate::renderer::surface::Color;
use crate::systems::sampling;
use crate::systems::steering::Kinematics;

use super::config::SwarmConfig;

/// A steered swarm agent. Positions are relative to the viewport centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kinematics: Kinematics,
    pub prev: Vec2,
    pub size: f32,
}

/// Stroke parameters for one particle, derived from its speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
}

impl Particle {
    pub fn new(position: Vec2, max_speed: f32, max_force: f32, size: f32) -> Self {
        Self {
            kinematics: Kinematics::new(position, max_speed, max_force),
            prev: position,
            size,
        }
    }

    /// Random limits from `config`, placed uniformly over the viewport.
    pub fn spawn(rng: &mut Rng, config: &SwarmConfig, width: f32, height: f32) -> Self {
        let max_speed = sampling::max_speed(rng, config.max_speed);
        let max_force = sampling::max_force(rng, config.max_force);
        let size = sampling::particle_size(rng, config.size);
        let pos = sampling::point_in_viewport(rng, width, height);
        Self::new(pos, max_speed, max_force, size)
    }

    pub fn pos(&self) -> Vec2 {
        self.kinematics.position
    }

    /// Teleport without leaving a trail.
    pub fn place(&mut self, pos: Vec2) {
        self.kinematics.position = pos;
        self.prev = pos;
    }

    pub fn seek(&mut self, target: Vec2) {
        self.kinematics.seek(target);
        self.kinematics.integrate();
    }

    /// Faster particles draw brighter, more opaque and thicker.
    pub fn style(&self, config: &SwarmConfig) -> StrokeStyle {
        let speed = self.kinematics.speed();
        let top = self.kinematics.max_speed;
        let map = |(lo, hi): (f32, f32)| map_range(speed, 0.0, top, lo, hi);
        let brightness = map(config.brightness);
        let alpha = map(config.opacity);
        let (w_lo, w_hi) = config.width_fraction;
        StrokeStyle {
            width: map((self.size * w_lo, self.size * w_hi)),
            color: Color::gray(brightness, alpha),
        }
    }

    pub fn commit(&mut self) {
        self.prev = self.kinematics.position;
    }
}
