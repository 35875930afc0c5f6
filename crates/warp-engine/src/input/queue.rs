/// Host input, in logical (CSS) pixels relative to the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor or touch moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Cursor left the surface.
    PointerLeave,
    /// A custom event from the host page.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Custom kind that forces the countdown to expire immediately.
    pub const CUSTOM_EXPIRE: u32 = 1;

    pub fn expire() -> Self {
        InputEvent::Custom { kind: Self::CUSTOM_EXPIRE, a: 0.0, b: 0.0, c: 0.0 }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, InputEvent::PointerMove { .. } | InputEvent::PointerLeave)
    }
}

/// Events pushed by the host between steps, read by the next step.
///
/// Back-to-back pointer moves collapse into the latest one: a fast mouse
/// can report several per frame and only the final position matters.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self { events: Vec::with_capacity(16) }
    }

    pub fn push(&mut self, event: InputEvent) {
        if let (InputEvent::PointerMove { .. }, Some(InputEvent::PointerMove { .. })) =
            (event, self.events.last())
        {
            if let Some(last) = self.events.last_mut() {
                *last = event;
            }
            return;
        }
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Most recent pointer event, if any arrived.
    pub fn last_pointer(&self) -> Option<InputEvent> {
        self.events.iter().rev().find(|e| e.is_pointer()).copied()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_moves_coalesce() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        q.push(InputEvent::PointerMove { x: 2.0, y: 3.0 });
        assert_eq!(q.len(), 1);
        assert_eq!(q.last_pointer(), Some(InputEvent::PointerMove { x: 2.0, y: 3.0 }));

        // A leave in between keeps both moves.
        q.push(InputEvent::PointerLeave);
        q.push(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn custom_events_are_kept_in_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::expire());
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        q.push(InputEvent::expire());
        let kinds: Vec<u32> = q
            .iter()
            .filter_map(|e| match *e {
                InputEvent::Custom { kind, .. } => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec![1, 7, 1]);
        assert_eq!(q.last_pointer(), None);

        q.clear();
        assert!(q.is_empty());
    }
}
