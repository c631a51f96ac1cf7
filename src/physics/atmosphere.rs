// ---------------------------------------------------------------------------
// Barometric atmosphere with a temperature floor
// ---------------------------------------------------------------------------

pub const GAS_CONSTANT: f64 = 8.31; // J/(mol·K)

/// Atmosphere with a linear temperature lapse, floored at a tropopause-like
/// minimum, and barometric density.
///
/// The temperature is genuine mutable state: it is recomputed on every
/// [`density`](Atmosphere::density) query while it sits above
/// `temperature_floor`, and stays frozen at its last value once it has
/// dropped to or below the floor, even if later queries come from lower
/// altitudes. The result therefore depends on the order of queries, not on
/// altitude alone. One `Atmosphere` value is shared across all stage burns
/// of a mission run and must not be reused between runs without
/// [`reset`](Atmosphere::reset).
#[derive(Debug, Clone)]
pub struct Atmosphere {
    pub sea_level_temperature: f64, // K
    pub temperature_floor: f64,     // K
    pub lapse_rate: f64,            // K lost per full 100 m of altitude
    pub sea_level_pressure: f64,    // Pa
    pub molar_mass: f64,            // kg/mol, air
    temperature: f64,               // current, updated on each query
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            sea_level_temperature: 288.0,
            temperature_floor: 160.0,
            lapse_rate: 0.6,
            sea_level_pressure: 101_325.0,
            molar_mass: 0.029,
            temperature: 288.0,
        }
    }
}

impl Atmosphere {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the freeze threshold (builder style).
    pub fn with_temperature_floor(mut self, floor: f64) -> Self {
        self.temperature_floor = floor;
        self
    }

    /// Current temperature (K) as left behind by the last query.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Restore the sea-level reference temperature for a fresh run.
    pub fn reset(&mut self) {
        self.temperature = self.sea_level_temperature;
    }

    /// Air density (kg/m³) at the given altitude, using the gravitational
    /// acceleration the caller computed for that same altitude.
    ///
    /// Updates the stored temperature first: while the previous value is
    /// above the floor, T = T0 − lapse · ⌊y / 100⌋. A single query from high
    /// altitude can jump the temperature straight past the floor; whatever
    /// value that lands on is the one that stays frozen.
    pub fn density(&mut self, altitude: f64, gravity: f64) -> f64 {
        if self.temperature > self.temperature_floor {
            self.temperature =
                self.sea_level_temperature - self.lapse_rate * (altitude / 100.0).floor();
        }
        let rt = GAS_CONSTANT * self.temperature;
        self.sea_level_pressure * (-self.molar_mass * gravity * altitude / rt).exp()
            * self.molar_mass
            / rt
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
