use std::cell::RefCell;

use crate::dynamics::state::RocketState;
use crate::dynamics::AscentDynamics;
use crate::error::SimError;
use crate::physics::atmosphere::Atmosphere;
use crate::physics::gravity::Body;
use crate::vehicle::Mission;

use super::event::{EventKind, SimEvent};
use super::integrator::{StageIntegrator, DEFAULT_ATOL, DEFAULT_RTOL};
use super::trajectory::MissionTrajectory;

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// Environment and solver settings for one mission run. The atmosphere held
/// here is a template: each run works on a fresh copy reset to the sea-level
/// reference temperature.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub body: Body,
    pub atmosphere: Atmosphere,
    pub rtol: f64,
    pub atol: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body: Body::KERBIN,
            atmosphere: Atmosphere::default(),
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

// ---------------------------------------------------------------------------
// Full mission simulation
// ---------------------------------------------------------------------------

/// Simulate the whole powered ascent starting from an explicit initial state.
///
/// Stages are integrated strictly in mission order, each seeded with the
/// previous stage's final state minus the separated dry mass; position and
/// velocities carry over unchanged. Each stage's local time axis is shifted
/// by the elapsed time of all prior stages and the sequences are stitched
/// into one strictly increasing trajectory: the later stage's t = 0 sample
/// duplicates the previous burnout time and is skipped; the post-separation
/// state is recorded on the [`EventKind::Separation`] event instead.
///
/// Any stage failure aborts the run; there are no retries.
pub fn simulate_from(
    mission: &Mission,
    config: &SimConfig,
    initial: RocketState,
) -> Result<MissionTrajectory, SimError> {
    mission.validate()?;

    let mut atmosphere = config.atmosphere.clone();
    atmosphere.reset();
    let atmosphere = RefCell::new(atmosphere);
    let integrator = StageIntegrator {
        rtol: config.rtol,
        atol: config.atol,
    };

    let mut times = Vec::new();
    let mut states = Vec::new();
    let mut events = vec![SimEvent {
        time: 0.0,
        kind: EventKind::Liftoff,
        state: initial,
    }];

    let mut state = initial;
    let mut elapsed = 0.0;

    for (index, stage) in mission.stages.iter().enumerate() {
        let dynamics = AscentDynamics {
            thrust: stage.thrust,
            mass_flow: stage.mass_flow(),
            drag_coeff: mission.drag_coeff,
            ref_area: mission.ref_area,
            body: &config.body,
            atmosphere: &atmosphere,
        };

        let segment = integrator.integrate(dynamics, &state, stage.burn_time, stage.samples)?;
        let &(stage_end, end_state) = segment
            .last()
            .expect("solver output contains at least the initial sample");

        for (i, &(t, s)) in segment.iter().enumerate() {
            if index > 0 && i == 0 {
                continue; // duplicate of the previous stage's burnout sample
            }
            times.push(elapsed + t);
            states.push(s);
        }

        elapsed += stage_end;
        state = end_state;

        if index + 1 < mission.stages.len() {
            state.mass -= stage.dry_mass;
            events.push(SimEvent {
                time: elapsed,
                kind: EventKind::Separation {
                    stage: index,
                    dropped_mass: stage.dry_mass,
                },
                state,
            });
        } else {
            events.push(SimEvent {
                time: elapsed,
                kind: EventKind::Burnout { stage: index },
                state,
            });
        }
    }

    Ok(MissionTrajectory::new(times, states, events))
}

/// Simulate from rest on the pad at full wet mass (convenience wrapper).
pub fn simulate(mission: &Mission, config: &SimConfig) -> Result<MissionTrajectory, SimError> {
    simulate_from(mission, config, RocketState::on_pad(mission.total_mass()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
