use warp_engine::{
    step, Animation, AnimationEvent, EngineConfig, EngineContext, FixedTimestep, InputEvent,
    InputQueue, Surface, Viewport,
};

/// Where a runner is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Created,
    Running,
    TornDown,
}

/// Generic runner that wires an animation to a surface and a frame clock.
///
/// Each concrete demo keeps one in `thread_local!` storage and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. Nothing here touches the DOM, so the whole
/// loop runs natively in tests.
pub struct AnimationRunner<A: Animation, S: Surface> {
    animation: A,
    ctx: EngineContext<A::Task>,
    input: InputQueue,
    timestep: FixedTimestep,
    config: EngineConfig,
    surface: Option<S>,
    state: RunnerState,
}

impl<A: Animation, S: Surface> AnimationRunner<A, S> {
    pub fn new(animation: A, surface: S) -> Self {
        let config = animation.config();
        Self::with_config(animation, surface, config)
    }

    /// Use `config` instead of the animation's own (e.g. with a host seed).
    pub fn with_config(animation: A, surface: S, config: EngineConfig) -> Self {
        let size = surface.size();
        let viewport = Viewport::new(size.x, size.y);
        Self {
            ctx: EngineContext::new(config.seed(), viewport),
            timestep: FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame),
            animation,
            input: InputQueue::new(),
            config,
            surface: Some(surface),
            state: RunnerState::Created,
        }
    }

    /// Initialize the animation. Returns the events it emitted (e.g. the first
    /// countdown value). Only the first call does anything.
    pub fn init(&mut self) -> Vec<AnimationEvent> {
        if self.state != RunnerState::Created {
            return Vec::new();
        }
        self.animation.init(&mut self.ctx);
        self.state = RunnerState::Running;
        self.ctx.drain_events()
    }

    /// `init`, then `start` the host side (typically the frame loop). If
    /// `start` fails the runner is torn down and the surface handed back with
    /// the error, so nothing stays scheduled or attached.
    pub fn launch<L, E>(
        &mut self,
        start: impl FnOnce() -> Result<L, E>,
    ) -> Result<(L, Vec<AnimationEvent>), (E, Option<S>)> {
        let initial = self.init();
        match start() {
            Ok(started) => Ok((started, initial)),
            Err(e) => Err((e, self.teardown())),
        }
    }

    /// Queue an input event for the next fixed step.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.state == RunnerState::Running {
            self.input.push(event);
        }
    }

    /// Run one host frame: fixed steps for `dt` seconds, then one draw if
    /// anything advanced. Returns the events emitted during the frame.
    pub fn tick(&mut self, dt: f32) -> Vec<AnimationEvent> {
        if self.state != RunnerState::Running {
            return Vec::new();
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            step(&mut self.animation, &mut self.ctx, &self.input, self.timestep.dt());
            // Input is seen by exactly one step
            self.input.clear();
        }

        if steps > 0 {
            if let Some(surface) = self.surface.as_mut() {
                self.animation.draw(surface);
            }
        }

        self.ctx.drain_events()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.state != RunnerState::Running {
            return;
        }
        self.ctx.set_viewport(viewport);
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
        self.animation.resize(viewport, &mut self.ctx);
    }

    /// Cancel every task, drop pending input and hand the surface back so
    /// the host can detach it. Later ticks are no-ops.
    pub fn teardown(&mut self) -> Option<S> {
        if self.state == RunnerState::TornDown {
            return None;
        }
        self.ctx.shutdown();
        self.input.clear();
        self.state = RunnerState::TornDown;
        self.surface.take()
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunnerState::Running
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn context(&self) -> &EngineContext<A::Task> {
        &self.ctx
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp_engine::{
        DrawList, DrawOp, FieldConfig, FieldPhase, MorphSwarm, OrbitalField, Shape, SwarmConfig,
    };

    fn field_runner() -> AnimationRunner<OrbitalField, DrawList> {
        let field = OrbitalField::with_config(
            FieldConfig { star_count: 16, ..FieldConfig::default() },
            EngineConfig::default(),
        );
        AnimationRunner::new(field, DrawList::new(800.0, 600.0))
    }

    fn frames(runner: &mut AnimationRunner<OrbitalField, DrawList>, n: usize) -> Vec<AnimationEvent> {
        (0..n).flat_map(|_| runner.tick(1.0 / 60.0)).collect()
    }

    #[test]
    fn init_reports_first_countdown_value() {
        let mut runner = field_runner();
        assert_eq!(runner.state(), RunnerState::Created);
        assert!(runner.tick(1.0 / 60.0).is_empty());
        assert_eq!(runner.init(), vec![AnimationEvent::Countdown(Some(5))]);
        assert!(runner.init().is_empty());
        assert!(runner.is_running());
        assert_eq!(runner.animation().stars().len(), 16);
    }

    #[test]
    fn tick_draws_once_per_frame() {
        let mut runner = field_runner();
        runner.init();
        // Three steps' worth of time, one draw.
        runner.tick(3.0 / 60.0);
        let list = runner.surface().unwrap();
        let fades = list.ops().iter().filter(|op| matches!(op, DrawOp::Fade(_))).count();
        assert_eq!(fades, 1);
        assert_eq!(list.line_count(), 16);
        assert_eq!(runner.context().frame(), 3);
    }

    #[test]
    fn short_frame_does_not_draw() {
        let mut runner = field_runner();
        runner.init();
        runner.tick(0.004);
        assert!(runner.surface().unwrap().ops().is_empty());
    }

    #[test]
    fn sequence_completes_once_through_runner() {
        let mut runner = field_runner();
        runner.init();
        runner.push_input(InputEvent::expire());
        let mut events = frames(&mut runner, 30);
        runner.push_input(InputEvent::expire());
        events.extend(frames(&mut runner, 300));

        let complete = events.iter().filter(|e| **e == AnimationEvent::SequenceComplete).count();
        assert_eq!(complete, 1);
        assert_eq!(runner.animation().phase(), FieldPhase::Done);
    }

    #[test]
    fn teardown_stops_everything() {
        let mut runner = field_runner();
        runner.init();
        frames(&mut runner, 10);

        let surface = runner.teardown();
        assert!(surface.is_some());
        assert!(runner.teardown().is_none());
        assert_eq!(runner.state(), RunnerState::TornDown);
        assert!(runner.context().scheduler.is_empty());

        // No countdown ticks or draws after teardown.
        assert!(frames(&mut runner, 600).is_empty());
        runner.push_input(InputEvent::PointerLeave);
        runner.resize(Viewport::new(10.0, 10.0));
        assert!(runner.surface().is_none());
    }

    #[test]
    fn resize_reaches_surface_and_animation() {
        let swarm = MorphSwarm::with_config(
            SwarmConfig { particle_count: 8, ..SwarmConfig::default() },
            EngineConfig::default(),
        );
        let mut runner = AnimationRunner::new(swarm, DrawList::new(800.0, 600.0));
        runner.init();
        runner.tick(1.0 / 60.0);

        runner.resize(Viewport::new(200.0, 100.0));
        assert_eq!(runner.context().viewport(), Viewport::new(200.0, 100.0));
        assert!((runner.animation().radius() - 30.0).abs() < 1e-4);
        assert_eq!(runner.animation().current_shape(), Shape::Circle);

        // Resize wiped the recording; the next frame starts with a clear.
        assert!(runner.surface().unwrap().ops().is_empty());
        runner.tick(1.0 / 60.0);
        let ops = runner.surface().unwrap().ops();
        assert!(matches!(ops[1], DrawOp::Clear(_)));
    }

    #[test]
    fn host_config_seed_is_used() {
        let a = {
            let config = EngineConfig { seed: Some(1), ..EngineConfig::default() };
            let mut r = AnimationRunner::with_config(OrbitalField::new(), DrawList::new(100.0, 100.0), config);
            r.init();
            r.animation().stars()[0].clone()
        };
        let b = {
            let config = EngineConfig { seed: Some(2), ..EngineConfig::default() };
            let mut r = AnimationRunner::with_config(OrbitalField::new(), DrawList::new(100.0, 100.0), config);
            r.init();
            r.animation().stars()[0].clone()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn failed_launch_leaves_nothing_behind() {
        let mut runner = field_runner();
        let result = runner.launch(|| Err::<(), _>("no frame loop"));

        let Err((err, surface)) = result else {
            panic!("launch should fail");
        };
        assert_eq!(err, "no frame loop");
        assert!(surface.is_some());
        assert_eq!(runner.state(), RunnerState::TornDown);
        assert!(runner.context().scheduler.is_empty());
        assert!(frames(&mut runner, 120).is_empty());
    }

    #[test]
    fn launch_returns_initial_events() {
        let mut runner = field_runner();
        let Ok((handle, initial)) = runner.launch(|| Ok::<_, ()>(7)) else {
            panic!("launch should succeed");
        };
        assert_eq!(handle, 7);
        assert_eq!(initial, vec![AnimationEvent::Countdown(Some(5))]);
        assert!(runner.is_running());
    }
}
