use ascent_sim::io::{csv, json, FlightSummary};
use ascent_sim::types::{simulate, EventKind, SimConfig};
use ascent_sim::vehicle::presets;

fn main() {
    let mission = presets::moon21();
    let config = SimConfig::default();

    let trajectory = match simulate(&mission, &config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ROCKET ASCENT SIMULATION — {}", mission.name);
    println!("====================================================================");
    println!();
    println!("  Vehicle");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Pad mass:      {:>9.0} kg    Payload:      {:>9.0} kg",
        mission.total_mass(),
        mission.payload_mass
    );
    println!(
        "  Cd:            {:>9.2}       Area:         {:>9.2} m^2",
        mission.drag_coeff, mission.ref_area
    );
    for (i, stage) in mission.stages.iter().enumerate() {
        println!(
            "  Stage {}:  {:<12}  dry {:>7.0} kg   fuel {:>7.0} kg   {:>8.0} N   {:>3.0} s",
            i + 1,
            stage.name,
            stage.dry_mass,
            stage.fuel_mass,
            stage.thrust,
            stage.burn_time
        );
    }
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in trajectory.events() {
        let label = match event.kind {
            EventKind::Liftoff => "LIFTOFF".to_string(),
            EventKind::Separation { stage, .. } => format!("SEP S{}", stage + 1),
            EventKind::Burnout { stage } => format!("BURNOUT S{}", stage + 1),
        };
        println!(
            "  {:<11} t={:>6.1}s   alt={:>8.0}m   vel={:>7.1}m/s   mass={:>8.0}kg",
            label,
            event.time,
            event.state.pos.y,
            event.state.speed(),
            event.state.mass
        );
    }
    println!();

    let summary = FlightSummary::from_trajectory(&trajectory);
    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max altitude:  {:>9.0} m   ({:.2} km)",
        summary.max_altitude_m,
        summary.max_altitude_m / 1000.0
    );
    println!("  Max speed:     {:>9.1} m/s", summary.max_speed);
    println!("  Final mass:    {:>9.0} kg", summary.final_mass_kg);
    println!("  Burn time:     {:>9.1} s", summary.flight_time);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>9}",
        "t (s)", "alt (m)", "vel (m/s)", "vy (m/s)", "mass (kg)"
    );
    println!("  {}", "─".repeat(56));

    let sample_interval = (trajectory.len() / 24).max(1);
    for (i, (t, s)) in trajectory.samples().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.1}  {:>9.1}  {:>9.1}  {:>9.1}  {:>9.1}",
            t,
            s.pos.y,
            s.speed(),
            s.vel.y,
            s.mass
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Export for the plotting / telemetry-comparison tools
    // -----------------------------------------------------------------------
    if let Err(e) = csv::write_trajectory_file("trajectory.csv", &trajectory) {
        eprintln!("failed to write trajectory.csv: {e}");
        std::process::exit(1);
    }
    if let Err(e) = json::write_summary_file("summary.json", &mission, &summary) {
        eprintln!("failed to write summary.json: {e}");
        std::process::exit(1);
    }
    println!("  Wrote trajectory.csv and summary.json");
    println!("====================================================================");
    println!();
}
