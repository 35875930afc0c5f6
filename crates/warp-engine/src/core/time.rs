/// Fixed timestep accumulator.
/// Keeps per-frame motion rules (e.g. "y -= 2.5 per frame") at a consistent
/// rate regardless of the display refresh rate.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Upper bound on steps per frame.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, 10)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 1.0 / 60.0 };
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (background tabs deliver huge deltas)
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        // Tolerate f32 drift so 1/60 fed at 60 Hz always yields one step.
        let steps = ((self.accumulator + self.dt * 1e-3) / self.dt) as u32;
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Simulation clock: elapsed seconds and frame count since mount.
///
/// Time is summed in f64; an f32 sum of 1/60 steps is visibly off after an
/// hour on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        self.frame += 1;
    }

    /// Seconds of simulated time since mount.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Number of simulation steps taken since mount.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
