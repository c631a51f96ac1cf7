pub mod mission;
pub mod stage;

pub use mission::{presets, Mission};
pub use stage::Stage;
