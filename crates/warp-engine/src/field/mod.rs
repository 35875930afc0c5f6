//! Orbital star field: a ring of stars orbiting the viewport centre that
//! collapses under the pointer, fans out when the countdown runs out and
//! then settles back into orbit.

pub mod config;
pub mod lifecycle;
pub mod star;

pub use config::FieldConfig;
pub use lifecycle::{Countdown, CountdownStep, FieldTask, Lifecycle};
pub use star::Star;

use glam::Vec2;

use crate::api::animation::{Animation, AnimationSetup, EngineConfig, EngineContext, FromSetupJson};
use crate::api::error::EngineError;
use crate::api::types::{AnimationEvent, FieldPhase};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::surface::{Color, Surface};

pub struct OrbitalField {
    config: FieldConfig,
    engine: EngineConfig,
    stars: Vec<Star>,
    center: Vec2,
    lifecycle: Lifecycle,
    countdown: Countdown,
}

impl OrbitalField {
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default(), EngineConfig::default())
    }

    pub fn with_config(config: FieldConfig, engine: EngineConfig) -> Self {
        let countdown = Countdown::new(config.countdown_start);
        Self {
            stars: Vec::with_capacity(config.star_count),
            config,
            engine,
            center: Vec2::ZERO,
            lifecycle: Lifecycle::new(),
            countdown,
        }
    }

    pub fn phase(&self) -> FieldPhase {
        self.lifecycle.phase()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Countdown expiry, from the timer or from the host. Only the first
    /// call has any effect.
    fn expire(&mut self, ctx: &mut EngineContext<FieldTask>) {
        if !self.lifecycle.expire() {
            log::debug!("orbital field: expiry ignored in {:?}", self.lifecycle.phase());
            return;
        }
        if self.countdown.stop(&mut ctx.scheduler) {
            ctx.emit(CountdownStep::Expired.event());
        }
        log::info!("orbital field: expanding");
        ctx.emit(AnimationEvent::PhaseChanged(FieldPhase::Expanding));
        ctx.scheduler.schedule_once(self.config.expand_dwell, FieldTask::FinishExpand);
    }

    fn set_hover(&mut self, hovering: bool, ctx: &mut EngineContext<FieldTask>) {
        if let Some(phase) = self.lifecycle.set_hover(hovering) {
            ctx.emit(AnimationEvent::PhaseChanged(phase));
        }
    }
}

impl Default for OrbitalField {
    fn default() -> Self {
        Self::new()
    }
}

impl FromSetupJson for OrbitalField {
    fn from_setup_json(json: &str) -> Result<Self, EngineError> {
        let setup = AnimationSetup::<FieldConfig>::from_json(json)?;
        Ok(Self::with_config(setup.animation, setup.engine))
    }
}

impl Animation for OrbitalField {
    type Task = FieldTask;

    fn config(&self) -> EngineConfig {
        self.engine.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext<FieldTask>) {
        self.center = ctx.viewport().center();
        self.stars.clear();
        for i in 0..self.config.star_count {
            self.stars.push(Star::spawn(
                i,
                self.center,
                self.config.max_orbit,
                self.config.star_color,
                &mut ctx.rng,
            ));
        }

        let first = self.countdown.start(&mut ctx.scheduler, self.config.countdown_tick);
        ctx.emit(first.event());
        log::info!(
            "orbital field: {} stars around ({}, {})",
            self.stars.len(),
            self.center.x,
            self.center.y
        );
    }

    fn on_task(&mut self, task: FieldTask, ctx: &mut EngineContext<FieldTask>) {
        match task {
            FieldTask::CountdownTick => match self.countdown.tick(&mut ctx.scheduler) {
                Some(step @ CountdownStep::Show(_)) => ctx.emit(step.event()),
                Some(CountdownStep::Expired) => {
                    ctx.emit(CountdownStep::Expired.event());
                    self.expire(ctx);
                }
                None => {}
            },
            FieldTask::FinishExpand => {
                if self.lifecycle.finish_expand() {
                    log::info!("orbital field: returning");
                    ctx.emit(AnimationEvent::PhaseChanged(FieldPhase::Returning));
                    ctx.scheduler.schedule_once(self.config.return_dwell, FieldTask::FinishReturn);
                }
            }
            FieldTask::FinishReturn => {
                if self.lifecycle.finish_return() {
                    log::info!("orbital field: sequence complete");
                    ctx.emit(AnimationEvent::PhaseChanged(FieldPhase::Done));
                    ctx.emit(AnimationEvent::SequenceComplete);
                }
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext<FieldTask>, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind: InputEvent::CUSTOM_EXPIRE, .. } => self.expire(ctx),
                InputEvent::Custom { kind, .. } => {
                    log::warn!("orbital field: unknown custom event kind {}", kind);
                }
                _ => {}
            }
        }

        // Only where the pointer ended up this step matters.
        match input.last_pointer() {
            Some(InputEvent::PointerMove { x, y }) => {
                let inside = Vec2::new(x, y).distance(self.center) <= self.config.hover_radius;
                self.set_hover(inside, ctx);
            }
            Some(InputEvent::PointerLeave) => self.set_hover(false, ctx),
            _ => {}
        }

        let t = ctx.elapsed() * self.config.time_scale;
        let phase = self.lifecycle.phase();
        for star in &mut self.stars {
            star.update(t, phase);
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        surface.set_blend(self.config.blend);
        surface.fade(Color::BLACK.with_alpha(self.config.fade_alpha));
        for star in &mut self.stars {
            let (from, to) = star.trail(self.center);
            surface.stroke_line(from, to, star.size, star.color);
            star.commit();
        }
    }
}
