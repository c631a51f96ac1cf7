use crate::dynamics::state::RocketState;

use super::event::SimEvent;

// ---------------------------------------------------------------------------
// Stitched multi-stage trajectory with derived kinematics
// ---------------------------------------------------------------------------

/// Time series of the whole powered ascent: one strictly increasing time
/// axis across all stage burns, the sampled states, and the derived speed
/// and acceleration sequences. Built once per simulation run; read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct MissionTrajectory {
    times: Vec<f64>,
    states: Vec<RocketState>,
    speeds: Vec<f64>,
    accelerations: Vec<f64>,
    horizontal_accelerations: Vec<f64>,
    vertical_accelerations: Vec<f64>,
    events: Vec<SimEvent>,
}

impl MissionTrajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<RocketState>, events: Vec<SimEvent>) -> Self {
        let speeds: Vec<f64> = states.iter().map(RocketState::speed).collect();
        let accelerations = speeds.windows(2).map(|w| w[1] - w[0]).collect();
        let horizontal_accelerations = states.windows(2).map(|w| w[1].vel.x - w[0].vel.x).collect();
        let vertical_accelerations = states.windows(2).map(|w| w[1].vel.y - w[0].vel.y).collect();
        Self {
            times,
            states,
            speeds,
            accelerations,
            horizontal_accelerations,
            vertical_accelerations,
            events,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Mission-elapsed sample times (s), strictly increasing from 0.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[RocketState] {
        &self.states
    }

    /// (time, state) pairs in sample order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &RocketState)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Scalar speed per sample.
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Raw speed difference between consecutive samples (length `len() - 1`).
    ///
    /// These are deltas, NOT divided by the time step: they only read as true
    /// derivatives where the sample spacing is uniform, and the spacing
    /// differs between stages. Consumers comparing against fixed-cadence
    /// telemetry must resample.
    pub fn accelerations(&self) -> &[f64] {
        &self.accelerations
    }

    /// Raw horizontal velocity deltas, same caveat as [`accelerations`](Self::accelerations).
    pub fn horizontal_accelerations(&self) -> &[f64] {
        &self.horizontal_accelerations
    }

    /// Raw vertical velocity deltas, same caveat as [`accelerations`](Self::accelerations).
    pub fn vertical_accelerations(&self) -> &[f64] {
        &self.vertical_accelerations
    }

    /// Liftoff, separations and final burnout, in time order.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn final_state(&self) -> Option<&RocketState> {
        self.states.last()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
