use std::cell::RefCell;

use nalgebra::Vector2;
use ode_solvers::System;

use crate::gnc::guidance;
use crate::physics::aerodynamics;
use crate::physics::atmosphere::Atmosphere;
use crate::physics::gravity::Body;

pub mod state;

use state::{Deriv, RocketState, StateVec};

// ---------------------------------------------------------------------------
// Equations of motion (planar point-mass, one stage burn)
// ---------------------------------------------------------------------------

/// Per-stage dynamics: constant thrust and mass flow, drag, inverse-square
/// gravity, and the gravity-turn pitch program.
///
/// Holds the stage's burn constants plus the shared environment. The
/// atmosphere is behind a `RefCell` because every derivative evaluation
/// advances its temperature (the one side effect in the model), and a single
/// atmosphere is shared by all stages of a mission run.
pub struct AscentDynamics<'a> {
    pub thrust: f64,     // N
    pub mass_flow: f64,  // kg/s
    pub drag_coeff: f64, // dimensionless
    pub ref_area: f64,   // m²
    pub body: &'a Body,
    pub atmosphere: &'a RefCell<Atmosphere>,
}

impl AscentDynamics<'_> {
    /// Compute state derivatives for a given state.
    ///
    /// Forces modeled:
    ///   1. Thrust  — constant magnitude, along the commanded pitch
    ///   2. Drag    — quadratic, subtracted from thrust along the same axis
    ///   3. Gravity — inverse-square law, straight down
    ///
    /// Assumes the caller keeps `mass` positive: fuel mass and burn time must
    /// be sized so the stage never burns below its dry mass.
    pub fn derivatives(&self, s: &RocketState) -> Deriv {
        let altitude = s.pos.y;
        let speed_sq = s.vel.norm_squared();

        let pitch = guidance::pitch_angle(altitude).to_radians();
        let g = self.body.gravity_accel(altitude);
        // The only side effect: advances the shared temperature state.
        let density = self.atmosphere.borrow_mut().density(altitude, g);

        let drag = aerodynamics::drag_force(density, speed_sq, self.drag_coeff, self.ref_area);
        let weight = g * s.mass;

        let accel_x = (self.thrust - drag) * pitch.cos() / s.mass;
        let accel_y = ((self.thrust - drag) * pitch.sin() - weight) / s.mass;

        Deriv {
            dpos: s.vel,
            dvel: Vector2::new(accel_x, accel_y),
            dmass: -self.mass_flow,
        }
    }
}

impl System<StateVec> for AscentDynamics<'_> {
    fn system(&self, _t: f64, y: &StateVec, dy: &mut StateVec) {
        let d = self.derivatives(&RocketState::from_raw(y));
        dy[0] = d.dpos.x;
        dy[1] = d.dvel.x;
        dy[2] = d.dpos.y;
        dy[3] = d.dvel.y;
        dy[4] = d.dmass;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
