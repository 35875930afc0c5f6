use serde::{Deserialize, Serialize};

use crate::api::error::EngineError;
use crate::api::types::AnimationEvent;
use crate::core::rng::Rng;
use crate::core::schedule::Scheduler;
use crate::core::time::FrameClock;
use crate::input::queue::InputQueue;
use crate::renderer::surface::Surface;
use crate::renderer::viewport::Viewport;

/// Host-level settings shared by every animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on fixed steps run for one host frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Display density used to size the canvas backing store (default: 192).
    pub dpi: f32,
    /// RNG seed. Hosts pick one when unset.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            dpi: 192.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub const DEFAULT_SEED: u64 = 42;

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(Self::DEFAULT_SEED)
    }
}

/// Full setup document for one animation:
/// `{ "engine": { ... }, "animation": { ... } }`, both sections optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "C: Default + Deserialize<'de>"))]
pub struct AnimationSetup<C> {
    pub engine: EngineConfig,
    pub animation: C,
}

impl<C: Default + serde::de::DeserializeOwned> AnimationSetup<C> {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Animations a host can build from a JSON setup string.
pub trait FromSetupJson: Sized {
    fn from_setup_json(json: &str) -> Result<Self, EngineError>;
}

/// The contract every animation fulfils.
///
/// Timers are expressed as values of `Task`, scheduled on the context's
/// `Scheduler` and handed back through `on_task` when they come due. Every
/// timer belongs to the instance; teardown is one `cancel_all`.
pub trait Animation {
    type Task: Copy;

    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Build initial state and schedule the first tasks.
    fn init(&mut self, ctx: &mut EngineContext<Self::Task>);

    /// A scheduled task came due.
    fn on_task(&mut self, task: Self::Task, ctx: &mut EngineContext<Self::Task>);

    /// One fixed step of simulation.
    fn update(&mut self, ctx: &mut EngineContext<Self::Task>, input: &InputQueue);

    /// Draw the current state. Takes `&mut self` because trail rendering
    /// commits each entity's previous position once it is drawn.
    fn draw(&mut self, surface: &mut dyn Surface);

    /// The host viewport changed size.
    fn resize(&mut self, _viewport: Viewport, _ctx: &mut EngineContext<Self::Task>) {}
}

/// Mutable engine state passed to `Animation` callbacks.
pub struct EngineContext<T> {
    pub scheduler: Scheduler<T>,
    pub rng: Rng,
    events: Vec<AnimationEvent>,
    viewport: Viewport,
    clock: FrameClock,
}

impl<T: Copy> EngineContext<T> {
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            scheduler: Scheduler::new(),
            rng: Rng::new(seed),
            events: Vec::with_capacity(8),
            viewport,
            clock: FrameClock::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Seconds of simulated time since init.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Fixed steps run since init.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Queue an event for the host.
    pub fn emit(&mut self, event: AnimationEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[AnimationEvent] {
        &self.events
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cancel every owned task and drop undelivered events.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.events.clear();
    }
}

/// Run one fixed step: advance the clock, deliver due tasks in order, then
/// update. A task cancelled by an earlier task in the same step never fires.
pub fn step<A: Animation>(
    animation: &mut A,
    ctx: &mut EngineContext<A::Task>,
    input: &InputQueue,
    dt: f32,
) {
    ctx.clock.advance(dt);
    ctx.scheduler.advance(dt);
    while let Some(task) = ctx.scheduler.pop_due() {
        animation.on_task(task, ctx);
    }
    animation.update(ctx, input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::DrawList;
    use crate::renderer::surface::Color;
    use glam::Vec2;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Beat {
        Tick,
        Stop,
    }

    #[derive(Default)]
    struct Metronome {
        ticks: u32,
        updates: u32,
        tick_id: Option<crate::core::schedule::TaskId>,
    }

    impl Animation for Metronome {
        type Task = Beat;

        fn init(&mut self, ctx: &mut EngineContext<Beat>) {
            self.tick_id = Some(ctx.scheduler.schedule_every(0.5, Beat::Tick));
            ctx.scheduler.schedule_once(1.25, Beat::Stop);
        }

        fn on_task(&mut self, task: Beat, ctx: &mut EngineContext<Beat>) {
            match task {
                Beat::Tick => self.ticks += 1,
                Beat::Stop => {
                    if let Some(id) = self.tick_id.take() {
                        ctx.scheduler.cancel(id);
                    }
                    ctx.emit(AnimationEvent::SequenceComplete);
                }
            }
        }

        fn update(&mut self, _ctx: &mut EngineContext<Beat>, _input: &InputQueue) {
            self.updates += 1;
        }

        fn draw(&mut self, surface: &mut dyn Surface) {
            surface.stroke_line(Vec2::ZERO, Vec2::X, 1.0, Color::WHITE);
        }
    }

    #[test]
    fn step_delivers_tasks_then_updates() {
        let mut m = Metronome::default();
        let mut ctx = EngineContext::new(1, Viewport::new(100.0, 100.0));
        let input = InputQueue::new();
        m.init(&mut ctx);

        // 2.0 s in one big step: Tick(0.5), Tick(1.0), then Stop(1.25)
        // cancels the ticker, so Tick(1.5) never fires.
        step(&mut m, &mut ctx, &input, 2.0);
        assert_eq!(m.ticks, 2);
        assert_eq!(m.updates, 1);
        assert_eq!(ctx.drain_events(), vec![AnimationEvent::SequenceComplete]);
        assert!(ctx.scheduler.is_empty());
        assert_eq!(ctx.frame(), 1);
        assert!((ctx.elapsed() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn shutdown_cancels_everything() {
        let mut m = Metronome::default();
        let mut ctx = EngineContext::new(1, Viewport::new(100.0, 100.0));
        m.init(&mut ctx);
        ctx.emit(AnimationEvent::Countdown(Some(1)));
        ctx.shutdown();
        assert!(ctx.scheduler.is_empty());
        assert!(ctx.events().is_empty());

        step(&mut m, &mut ctx, &InputQueue::new(), 5.0);
        assert_eq!(m.ticks, 0);
    }

    #[test]
    fn draw_goes_through_surface() {
        let mut m = Metronome::default();
        let mut list = DrawList::new(10.0, 10.0);
        m.draw(&mut list);
        assert_eq!(list.line_count(), 1);
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg = EngineConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(EngineConfig::default().seed(), EngineConfig::DEFAULT_SEED);
        assert_eq!(cfg.max_steps_per_frame, 10);
        assert_eq!(cfg.dpi, 192.0);
        assert!(EngineConfig::from_json("{ not json").is_err());
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Knobs {
        count: u32,
    }

    #[test]
    fn setup_sections_are_optional() {
        let setup = AnimationSetup::<Knobs>::from_json(r#"{ "animation": { "count": 3 } }"#).unwrap();
        assert_eq!(setup.animation, Knobs { count: 3 });
        assert_eq!(setup.engine, EngineConfig::default());

        let setup = AnimationSetup::<Knobs>::from_json(r#"{ "engine": { "dpi": 96 } }"#).unwrap();
        assert_eq!(setup.engine.dpi, 96.0);
        assert_eq!(setup.animation, Knobs::default());
    }
}
