// ---------------------------------------------------------------------------
// Inverse-square gravity for a spherical body
// ---------------------------------------------------------------------------

pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11; // N·m²/kg²

/// Central body the rocket climbs away from. Passed explicitly into the
/// dynamics, never held as ambient state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64,   // kg
    pub radius: f64, // m
}

impl Body {
    /// Kerbin, the home planet of the recorded reference flights.
    pub const KERBIN: Body = Body {
        mass: 5.29e22,
        radius: 600_000.0,
    };

    /// Gravitational acceleration at a given altitude above the surface:
    /// g = G·M / (R + y)².
    pub fn gravity_accel(&self, altitude: f64) -> f64 {
        GRAVITATIONAL_CONSTANT * self.mass / (self.radius + altitude).powi(2)
    }

    pub fn surface_gravity(&self) -> f64 {
        self.gravity_accel(0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
