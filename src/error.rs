use thiserror::Error;

/// Simulation failures. Configuration errors are raised before any
/// integration starts; a solver failure aborts the whole mission run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("mission has no stages")]
    EmptyMission,

    #[error("stage {index} ({name}): {reason}")]
    InvalidStage {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("invalid mission: {reason}")]
    InvalidMission { reason: String },

    #[error("integration span must be positive, got {0} s")]
    NonPositiveSpan(f64),

    #[error("trajectory needs at least 2 samples per stage, got {0}")]
    TooFewSamples(usize),

    #[error("ode solver did not converge: {0}")]
    Solver(String),
}
