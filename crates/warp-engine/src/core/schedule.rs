//! Instance-owned timers.
//!
//! Countdown ticks, the shape-cycle interval and lifecycle dwell delays are
//! all entries in a `Scheduler` owned by one animation. The scheduler has no
//! clock of its own: the frame loop advances it with the same fixed steps that
//! drive the simulation, so timers and frames are serialized and tearing down
//! an instance is one `cancel_all()`.

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

/// Shortest allowed repeat interval, in seconds.
pub const MIN_INTERVAL: f32 = 1e-3;

/// Slack when comparing deadlines. Step and delay lengths arrive as f32,
/// so 60 steps of 1/60 need not sum to exactly 1.0.
const DUE_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    task: T,
    due: f64,
    interval: Option<f64>,
}

/// Deadline-ordered task queue driven by simulated time. Time and deadlines
/// are kept in f64 so long-running timers do not drift.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: f64,
    next_id: u32,
    entries: Vec<Entry<T>>,
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 1,
            entries: Vec::with_capacity(8),
        }
    }

    /// Current scheduler time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Run `task` once, `delay` seconds from now.
    pub fn schedule_once(&mut self, delay: f32, task: T) -> TaskId {
        let delay = if delay.is_finite() { delay.max(0.0) } else { 0.0 };
        self.insert(task, self.now + delay as f64, None)
    }

    /// Run `task` every `interval` seconds, first after one interval.
    pub fn schedule_every(&mut self, interval: f32, task: T) -> TaskId {
        let interval = if interval.is_finite() {
            interval.max(MIN_INTERVAL)
        } else {
            MIN_INTERVAL
        };
        let interval = interval as f64;
        self.insert(task, self.now + interval, Some(interval))
    }

    fn insert(&mut self, task: T, due: f64, interval: Option<f64>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, task, due, interval });
        id
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel everything. Called on teardown.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Move time forward. Due tasks are then collected with `pop_due`.
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt as f64;
        }
    }

    /// Pop the earliest task whose deadline has passed.
    ///
    /// Repeating tasks are re-armed one interval later, so a long frame
    /// delivers every missed tick in order. Ties go to the task scheduled first.
    pub fn pop_due(&mut self) -> Option<T> {
        let now = self.now + DUE_EPSILON;
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)))
            .map(|(idx, _)| idx)?;

        let entry = &mut self.entries[idx];
        let task = entry.task;
        match entry.interval {
            Some(interval) => entry.due += interval,
            None => {
                self.entries.remove(idx);
            }
        }
        Some(task)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
