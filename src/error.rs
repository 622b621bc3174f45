use thiserror::Error;

/// Error types for the center-of-gravity solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// No demand points were supplied. This is a caller bug.
    #[error("Empty point set: at least one demand point is required")]
    EmptyPointSet,

    /// The weights of all demand points sum to zero, so no centroid exists
    #[error("Zero total weight: no positive total weight across demand points")]
    ZeroTotalWeight,

    /// A demand point weight is negative or not finite
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Two demand points share an id
    #[error("Duplicate point id: {0}")]
    DuplicateId(String),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Imported point data does not have the expected shape
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// The run already reached its terminal converged state
    #[error("Run converged at step {step}; no further steps may be requested")]
    AlreadyConverged { step: usize },
}
