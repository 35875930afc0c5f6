//! Phase machine and countdown for the orbital field.
//!
//! Transitions only move forward: Orbiting/Hovering → Expanding →
//! Returning → Done. Hovering is the one reversible state and only while
//! the countdown is still running.

use crate::api::types::{AnimationEvent, FieldPhase};
use crate::core::schedule::{Scheduler, TaskId};

/// Timers owned by an orbital field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTask {
    CountdownTick,
    FinishExpand,
    FinishReturn,
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    phase: FieldPhase,
    completed: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    /// Pointer entered or left the hover disc. Returns the new phase if it
    /// changed.
    pub fn set_hover(&mut self, hovering: bool) -> Option<FieldPhase> {
        let next = match (self.phase, hovering) {
            (FieldPhase::Orbiting, true) => FieldPhase::Hovering,
            (FieldPhase::Hovering, false) => FieldPhase::Orbiting,
            _ => return None,
        };
        self.phase = next;
        Some(next)
    }

    /// Start expanding. False if expansion already happened.
    pub fn expire(&mut self) -> bool {
        if !self.phase.accepts_expiry() {
            return false;
        }
        self.phase = FieldPhase::Expanding;
        true
    }

    pub fn finish_expand(&mut self) -> bool {
        if self.phase != FieldPhase::Expanding {
            return false;
        }
        self.phase = FieldPhase::Returning;
        true
    }

    /// Enter Done. True exactly once per lifecycle.
    pub fn finish_return(&mut self) -> bool {
        if self.phase != FieldPhase::Returning || self.completed {
            return false;
        }
        self.phase = FieldPhase::Done;
        self.completed = true;
        true
    }
}

/// What a countdown tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Show(u32),
    Expired,
}

impl CountdownStep {
    pub fn event(self) -> AnimationEvent {
        match self {
            CountdownStep::Show(n) => AnimationEvent::Countdown(Some(n)),
            CountdownStep::Expired => AnimationEvent::Countdown(None),
        }
    }
}

/// Decrementing counter driven by a repeating task.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: i64,
    task: Option<TaskId>,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self {
            remaining: start as i64,
            task: None,
        }
    }

    /// Schedule the repeating tick and return the value to show right away.
    pub fn start(&mut self, scheduler: &mut Scheduler<FieldTask>, interval: f32) -> CountdownStep {
        if let Some(id) = self.task.take() {
            scheduler.cancel(id);
        }
        self.task = Some(scheduler.schedule_every(interval, FieldTask::CountdownTick));
        CountdownStep::Show(self.remaining.max(0) as u32)
    }

    /// Decrement. Falling below zero cancels the tick and reports expiry.
    pub fn tick(&mut self, scheduler: &mut Scheduler<FieldTask>) -> Option<CountdownStep> {
        if !self.is_running() {
            return None;
        }
        self.remaining -= 1;
        if self.remaining >= 0 {
            return Some(CountdownStep::Show(self.remaining as u32));
        }
        self.stop(scheduler);
        Some(CountdownStep::Expired)
    }

    /// Cancel the tick early. Returns true if it was still running.
    pub fn stop(&mut self, scheduler: &mut Scheduler<FieldTask>) -> bool {
        match self.task.take() {
            Some(id) => {
                scheduler.cancel(id);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle_completes_once() {
        let mut lc = Lifecycle::new();
        assert_eq!(lc.phase(), FieldPhase::Orbiting);
        assert!(lc.expire());
        assert!(!lc.expire());
        assert!(lc.finish_expand());
        assert!(!lc.expire());
        assert!(lc.finish_return());
        assert!(!lc.finish_return());
        assert_eq!(lc.phase(), FieldPhase::Done);
    }

    #[test]
    fn out_of_order_steps_are_ignored() {
        let mut lc = Lifecycle::new();
        assert!(!lc.finish_expand());
        assert!(!lc.finish_return());
        assert_eq!(lc.phase(), FieldPhase::Orbiting);
    }

    #[test]
    fn hover_toggles_only_before_expiry() {
        let mut lc = Lifecycle::new();
        assert_eq!(lc.set_hover(true), Some(FieldPhase::Hovering));
        assert_eq!(lc.set_hover(true), None);
        assert_eq!(lc.set_hover(false), Some(FieldPhase::Orbiting));

        lc.set_hover(true);
        assert!(lc.expire());
        assert_eq!(lc.set_hover(false), None);
        assert_eq!(lc.set_hover(true), None);
        assert_eq!(lc.phase(), FieldPhase::Expanding);
    }

    #[test]
    fn countdown_counts_to_expiry() {
        let mut sched = Scheduler::new();
        let mut cd = Countdown::new(5);
        let mut seen = vec![cd.start(&mut sched, 1.0)];
        while let Some(step) = cd.tick(&mut sched) {
            seen.push(step);
        }
        use CountdownStep::*;
        assert_eq!(seen, vec![Show(5), Show(4), Show(3), Show(2), Show(1), Show(0), Expired]);
        assert!(!cd.is_running());
        assert!(sched.is_empty());
        assert_eq!(cd.tick(&mut sched), None);
    }

    #[test]
    fn stop_cancels_the_tick() {
        let mut sched = Scheduler::new();
        let mut cd = Countdown::new(3);
        cd.start(&mut sched, 1.0);
        assert_eq!(sched.len(), 1);
        assert!(cd.stop(&mut sched));
        assert!(!cd.stop(&mut sched));
        assert!(sched.is_empty());
        assert_eq!(cd.remaining(), 3);
    }

    #[test]
    fn step_events() {
        assert_eq!(CountdownStep::Show(2).event(), AnimationEvent::Countdown(Some(2)));
        assert_eq!(CountdownStep::Expired.event(), AnimationEvent::Countdown(None));
    }
}
