use crate::dynamics::state::RocketState;

// ---------------------------------------------------------------------------
// Mission events
// ---------------------------------------------------------------------------

/// Kinds of discrete mission events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    Liftoff,
    /// A spent stage's dry mass was discarded. The event state is the
    /// post-separation state; the pre-separation mass is
    /// `state.mass + dropped_mass`.
    Separation { stage: usize, dropped_mass: f64 },
    /// Final stage finished its burn; end of the powered ascent.
    Burnout { stage: usize },
}

/// A discrete event with the vehicle state at the moment it occurred.
#[derive(Debug, Clone, Copy)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: RocketState,
}
