use crate::error::SimError;

use super::stage::Stage;

// ---------------------------------------------------------------------------
// Mission: ordered sequence of stages plus vehicle-wide aerodynamics
// ---------------------------------------------------------------------------

/// Complete vehicle and flight-plan description, passed explicitly into the
/// simulator. Drag coefficient and reference area belong to the whole
/// vehicle, not to individual stages.
#[derive(Debug, Clone)]
pub struct Mission {
    pub name: String,
    pub stages: Vec<Stage>,
    pub payload_mass: f64, // kg, carried on top of every stage
    pub drag_coeff: f64,   // dimensionless
    pub ref_area: f64,     // m², cross section facing the airstream
}

impl Mission {
    /// Total wet mass at ignition: payload plus every stage's wet mass.
    pub fn total_mass(&self) -> f64 {
        self.payload_mass + self.stages.iter().map(Stage::total_mass).sum::<f64>()
    }

    /// Check every configuration invariant before integration starts.
    /// All of these are fatal; nothing is clamped or repaired.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.stages.is_empty() {
            return Err(SimError::EmptyMission);
        }
        if self.payload_mass < 0.0 {
            return Err(SimError::InvalidMission {
                reason: "payload mass must not be negative".into(),
            });
        }
        if self.drag_coeff < 0.0 {
            return Err(SimError::InvalidMission {
                reason: "drag coefficient must not be negative".into(),
            });
        }
        if self.ref_area <= 0.0 {
            return Err(SimError::InvalidMission {
                reason: "reference area must be positive".into(),
            });
        }
        for (index, stage) in self.stages.iter().enumerate() {
            let fail = |reason: &str| SimError::InvalidStage {
                index,
                name: stage.name.clone(),
                reason: reason.into(),
            };
            if stage.dry_mass <= 0.0 {
                return Err(fail("dry mass must be positive"));
            }
            if stage.fuel_mass <= 0.0 {
                return Err(fail("fuel mass must be positive"));
            }
            if stage.thrust <= 0.0 {
                return Err(fail("thrust must be positive"));
            }
            if stage.burn_time <= 0.0 {
                return Err(fail("burn time must be positive"));
            }
            if stage.samples < 2 {
                return Err(fail("sample count must be at least 2"));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Preset missions
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Two-stage "Moon-21" vehicle matching the recorded reference flight:
    /// 195 988 kg on the pad, 90 s burns on both stages.
    pub fn moon21() -> Mission {
        Mission {
            name: "Moon-21".into(),
            payload_mass: 25_489.0,
            drag_coeff: 0.66,
            ref_area: 9.42,
            stages: vec![
                Stage {
                    name: "S1-Booster".into(),
                    dry_mass: 38_051.0,
                    fuel_mass: 97_000.0,
                    thrust: 2_964_000.0,
                    burn_time: 90.0,
                    samples: 50,
                },
                Stage {
                    name: "S2-Sustainer".into(),
                    dry_mass: 15_325.0,
                    fuel_mass: 20_123.0,
                    thrust: 703_000.0,
                    burn_time: 90.0,
                    samples: 90,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
