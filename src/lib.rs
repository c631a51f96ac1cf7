pub mod dynamics;
pub mod error;
pub mod gnc;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

// Convenience re-exports for the common entry points
pub mod types {
    pub use crate::dynamics::state::{Deriv, RocketState, StateVec};
    pub use crate::dynamics::AscentDynamics;
    pub use crate::error::SimError;
    pub use crate::physics::atmosphere::Atmosphere;
    pub use crate::physics::gravity::Body;
    pub use crate::sim::event::{EventKind, SimEvent};
    pub use crate::sim::runner::{simulate, simulate_from, SimConfig};
    pub use crate::sim::trajectory::MissionTrajectory;
    pub use crate::vehicle::mission::{presets, Mission};
    pub use crate::vehicle::stage::Stage;
}
