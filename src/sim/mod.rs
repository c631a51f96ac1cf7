pub mod event;
pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use event::{EventKind, SimEvent};
pub use integrator::StageIntegrator;
pub use runner::{simulate, simulate_from, SimConfig};
pub use trajectory::MissionTrajectory;
