use bytemuck::{Pod, Zeroable};

/// Lifecycle phase of the orbital star field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldPhase {
    /// Free orbit, stars drift back to their resting radius.
    #[default]
    Orbiting,
    /// Pointer over the centre: stars collapse toward the hover ring.
    Hovering,
    /// Countdown expired: half-speed orbit, stars fan out upward.
    Expanding,
    /// Stars ease back to their resting radius.
    Returning,
    /// Sequence finished; orbit continues but nothing else changes.
    Done,
}

impl FieldPhase {
    /// Whether the expiry transition can still fire from this phase.
    pub fn accepts_expiry(self) -> bool {
        matches!(self, FieldPhase::Orbiting | FieldPhase::Hovering)
    }

    /// Rotation speed multiplier for this phase.
    pub fn speed_factor(self) -> f32 {
        match self {
            FieldPhase::Expanding => 0.5,
            _ => 1.0,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            FieldPhase::Orbiting => 0,
            FieldPhase::Hovering => 1,
            FieldPhase::Expanding => 2,
            FieldPhase::Returning => 3,
            FieldPhase::Done => 4,
        }
    }
}

/// Something the host should know about, emitted during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationEvent {
    /// Countdown numeral to display; `None` once it has run out (blank).
    Countdown(Option<u32>),
    /// The star field entered a new phase.
    PhaseChanged(FieldPhase),
    /// The full sequence finished. Emitted at most once per engine.
    SequenceComplete,
}

impl AnimationEvent {
    pub const KIND_COUNTDOWN: f32 = 1.0;
    pub const KIND_PHASE: f32 = 2.0;
    pub const KIND_COMPLETE: f32 = 3.0;

    /// Flatten for the JS boundary.
    pub fn to_wire(self) -> WireEvent {
        match self {
            AnimationEvent::Countdown(Some(n)) => WireEvent {
                kind: Self::KIND_COUNTDOWN,
                a: n as f32,
                b: 1.0,
                c: 0.0,
            },
            AnimationEvent::Countdown(None) => WireEvent {
                kind: Self::KIND_COUNTDOWN,
                a: -1.0,
                b: 0.0,
                c: 0.0,
            },
            AnimationEvent::PhaseChanged(phase) => WireEvent {
                kind: Self::KIND_PHASE,
                a: phase.code() as f32,
                b: 0.0,
                c: 0.0,
            },
            AnimationEvent::SequenceComplete => WireEvent {
                kind: Self::KIND_COMPLETE,
                ..WireEvent::default()
            },
        }
    }
}

/// Event record handed to JavaScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Countdown: `a` = value (or -1), `b` = 1 when a numeral should show.
/// Phase: `a` = phase code.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
