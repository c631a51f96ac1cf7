use std::io::{self, Write};

use crate::sim::trajectory::MissionTrajectory;
use crate::vehicle::Mission;

/// Summary statistics computed from an ascent trajectory.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub max_altitude_m: f64,
    pub max_altitude_time: f64,
    pub max_speed: f64,
    pub final_altitude_m: f64,
    pub final_speed: f64,
    pub final_mass_kg: f64,
    pub flight_time: f64,
}

impl FlightSummary {
    /// Compute summary from trajectory data. The trajectory must not be
    /// empty (the simulator never produces an empty one).
    pub fn from_trajectory(trajectory: &MissionTrajectory) -> Self {
        let (apogee_time, apogee) = trajectory
            .samples()
            .max_by(|a, b| a.1.pos.y.partial_cmp(&b.1.pos.y).unwrap())
            .unwrap();

        let max_speed = trajectory.speeds().iter().copied().fold(0.0_f64, f64::max);

        let (final_time, final_state) = trajectory.samples().last().unwrap();

        FlightSummary {
            max_altitude_m: apogee.pos.y,
            max_altitude_time: apogee_time,
            max_speed,
            final_altitude_m: final_state.pos.y,
            final_speed: final_state.speed(),
            final_mass_kg: final_state.mass,
            flight_time: final_time,
        }
    }
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    mission: &Mission,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"mission\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", mission.name)?;
    writeln!(writer, "    \"stages\": {}", mission.stages.len())?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"ascent\": {{")?;
    writeln!(writer, "    \"max_altitude_m\": {:.2},", summary.max_altitude_m)?;
    writeln!(writer, "    \"max_altitude_time_s\": {:.2},", summary.max_altitude_time)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"final_altitude_m\": {:.2},", summary.final_altitude_m)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"final_mass_kg\": {:.2},", summary.final_mass_kg)?;
    writeln!(writer, "    \"flight_time_s\": {:.2}", summary.flight_time)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    mission: &Mission,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, mission, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::RocketState;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn climb_trajectory() -> MissionTrajectory {
        MissionTrajectory::new(
            vec![0.0, 10.0, 20.0],
            vec![
                RocketState::on_pad(100.0),
                RocketState {
                    pos: Vector2::new(100.0, 5_000.0),
                    vel: Vector2::new(50.0, 180.0),
                    mass: 80.0,
                },
                RocketState {
                    pos: Vector2::new(600.0, 8_000.0),
                    vel: Vector2::new(120.0, 90.0),
                    mass: 60.0,
                },
            ],
            vec![],
        )
    }

    #[test]
    fn summary_tracks_peak_and_final_values() {
        let s = FlightSummary::from_trajectory(&climb_trajectory());
        assert_relative_eq!(s.max_altitude_m, 8_000.0);
        assert_relative_eq!(s.max_altitude_time, 20.0);
        assert_relative_eq!(s.final_mass_kg, 60.0);
        assert_relative_eq!(s.flight_time, 20.0);
        assert_relative_eq!(s.final_speed, 150.0);
    }

    #[test]
    fn json_output_is_shaped_as_expected() {
        let traj = climb_trajectory();
        let summary = FlightSummary::from_trajectory(&traj);
        let mission = crate::vehicle::presets::moon21();

        let mut buf = Vec::new();
        write_summary(&mut buf, &mission, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"mission\""));
        assert!(json.contains("\"Moon-21\""));
        assert!(json.contains("\"max_altitude_m\": 8000.00"));
        assert!(json.contains("\"flight_time_s\": 20.00"));
    }
}
