use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Planar ascent state
// ---------------------------------------------------------------------------

/// State vector handed to the ode solver, laid out `[x, vx, y, vy, m]`.
pub type StateVec = ode_solvers::SVector<f64, 5>;

/// Full kinematic state at a single point in time.
/// Frame: planar, x downrange (m), y altitude (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub pos: Vector2<f64>, // m   [downrange, altitude]
    pub vel: Vector2<f64>, // m/s
    pub mass: f64,         // kg  (decreases during burn)
}

impl RocketState {
    /// At rest on the pad with the given total mass.
    pub fn on_pad(mass: f64) -> Self {
        Self {
            pos: Vector2::zeros(),
            vel: Vector2::zeros(),
            mass,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.y
    }

    /// Scalar speed √(vx² + vy²).
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn to_raw(&self) -> StateVec {
        StateVec::new(self.pos.x, self.vel.x, self.pos.y, self.vel.y, self.mass)
    }

    pub fn from_raw(raw: &StateVec) -> Self {
        Self {
            pos: Vector2::new(raw[0], raw[2]),
            vel: Vector2::new(raw[1], raw[3]),
            mass: raw[4],
        }
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt, dm/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
    pub dmass: f64,         // mass flow rate (negative during burn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn raw_round_trip_preserves_layout() {
        let state = RocketState {
            pos: Vector2::new(1.0, 2.0),
            vel: Vector2::new(3.0, 4.0),
            mass: 5.0,
        };
        let raw = state.to_raw();
        assert_eq!(raw[0], 1.0); // x
        assert_eq!(raw[1], 3.0); // vx
        assert_eq!(raw[2], 2.0); // y
        assert_eq!(raw[3], 4.0); // vy
        assert_eq!(raw[4], 5.0); // m
        assert_eq!(RocketState::from_raw(&raw), state);
    }

    #[test]
    fn speed_is_velocity_magnitude() {
        let state = RocketState {
            pos: Vector2::zeros(),
            vel: Vector2::new(3.0, 4.0),
            mass: 1.0,
        };
        assert_relative_eq!(state.speed(), 5.0);
    }
}
