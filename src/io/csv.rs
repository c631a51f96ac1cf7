use std::io::{self, Write};

use crate::sim::trajectory::MissionTrajectory;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, altitude, vx, vy, mass, speed
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &MissionTrajectory) -> io::Result<()> {
    writeln!(writer, "time,x,altitude,vx,vy,mass,speed")?;

    for ((t, s), speed) in trajectory.samples().zip(trajectory.speeds()) {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            t, s.pos.x, s.pos.y, s.vel.x, s.vel.y, s.mass, speed,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &MissionTrajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::RocketState;
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = MissionTrajectory::new(
            vec![0.0, 0.5],
            vec![
                RocketState::on_pad(100.0),
                RocketState {
                    pos: Vector2::new(0.0, 1.0),
                    vel: Vector2::new(0.0, 50.0),
                    mass: 99.5,
                },
            ],
            vec![],
        );

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[2].contains(",99.5000,"));
    }
}
