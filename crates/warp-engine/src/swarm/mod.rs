//! Shape-morph swarm: particles that seek points on a parametric outline,
//! cycling Circle → Square → Triangle → Star with an eased blend between
//! consecutive shapes.

pub mod config;
pub mod morph;
pub mod particle;

pub use config::{SwarmConfig, MIN_RADIUS};
pub use morph::MorphPhase;
pub use particle::{Particle, StrokeStyle};

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::animation::{Animation, AnimationSetup, EngineConfig, EngineContext, FromSetupJson};
use crate::api::error::EngineError;
use crate::geometry::Shape;
use crate::input::queue::InputQueue;
use crate::renderer::surface::{BlendMode, Color, Surface};
use crate::renderer::viewport::Viewport;

/// Timers owned by a swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarmTask {
    /// Start the next morph if the previous one has finished.
    Cycle,
}

pub struct MorphSwarm {
    config: SwarmConfig,
    engine: EngineConfig,
    particles: Vec<Particle>,
    morph: MorphPhase,
    radius: f32,
    center: Vec2,
    /// Set on resize; the next draw wipes instead of fading.
    needs_clear: bool,
}

impl MorphSwarm {
    pub fn new() -> Self {
        Self::with_config(SwarmConfig::default(), EngineConfig::default())
    }

    pub fn with_config(config: SwarmConfig, engine: EngineConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.particle_count),
            morph: MorphPhase::new(config.start_shape),
            config,
            engine,
            radius: 0.0,
            center: Vec2::ZERO,
            needs_clear: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn morph(&self) -> MorphPhase {
        self.morph
    }

    pub fn current_shape(&self) -> Shape {
        self.morph.current()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fixed boundary angle of particle `index`.
    pub fn angle_of(&self, index: usize) -> f32 {
        particle_angle(index, self.particles.len())
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.center = viewport.center();
        self.radius = self.config.radius_for(viewport.width, viewport.height);
    }
}

impl Default for MorphSwarm {
    fn default() -> Self {
        Self::new()
    }
}

impl FromSetupJson for MorphSwarm {
    fn from_setup_json(json: &str) -> Result<Self, EngineError> {
        let setup = AnimationSetup::<SwarmConfig>::from_json(json)?;
        Ok(Self::with_config(setup.animation, setup.engine))
    }
}

/// `2π·index/count`, spreading particles evenly around the outline.
pub fn particle_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f32 / count as f32
}

impl Animation for MorphSwarm {
    type Task = SwarmTask;

    fn config(&self) -> EngineConfig {
        self.engine.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext<SwarmTask>) {
        let viewport = ctx.viewport();
        self.apply_viewport(viewport);

        self.particles.clear();
        for _ in 0..self.config.particle_count {
            self.particles.push(Particle::spawn(&mut ctx.rng, &self.config, viewport.width, viewport.height));
        }
        self.needs_clear = true;

        ctx.scheduler.schedule_every(self.config.cycle_interval, SwarmTask::Cycle);
        log::info!(
            "morph swarm: {} particles, radius {:.1}, starting on {:?}",
            self.particles.len(),
            self.radius,
            self.morph.current()
        );
    }

    fn on_task(&mut self, task: SwarmTask, _ctx: &mut EngineContext<SwarmTask>) {
        match task {
            SwarmTask::Cycle => {
                if self.morph.begin() {
                    log::debug!("morph swarm: morph started {:?}", self.morph);
                }
            }
        }
    }

    fn update(&mut self, _ctx: &mut EngineContext<SwarmTask>, _input: &InputQueue) {
        // Completion first, so the frame that finishes a morph already
        // targets the new steady shape.
        if let Some(shape) = self.morph.advance(self.config.morph_frames) {
            log::debug!("morph swarm: settled on {:?}", shape);
        }

        let count = self.particles.len();
        let morph = self.morph;
        let (radius, frames, easing) = (self.radius, self.config.morph_frames, self.config.easing);
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let target = morph.target(particle_angle(i, count), radius, frames, easing);
            particle.seek(target);
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        surface.set_blend(BlendMode::Alpha);
        if self.needs_clear {
            surface.clear(Color::BLACK);
            self.needs_clear = false;
        } else {
            surface.fade(Color::BLACK.with_alpha(self.config.fade_alpha));
        }

        for particle in &mut self.particles {
            let style = particle.style(&self.config);
            surface.stroke_line(
                self.center + particle.prev,
                self.center + particle.pos(),
                style.width,
                style.color,
            );
            particle.commit();
        }
    }

    fn resize(&mut self, viewport: Viewport, _ctx: &mut EngineContext<SwarmTask>) {
        self.apply_viewport(viewport);
        let shape = self.morph.current();
        let count = self.particles.len();
        for (i, particle) in self.particles.iter_mut().enumerate() {
            particle.place(shape.boundary_point(particle_angle(i, count), self.radius));
        }
        self.needs_clear = true;
        log::debug!(
            "morph swarm: resized to {}x{}, radius {:.1}",
            viewport.width,
            viewport.height,
            self.radius
        );
    }
}
