use courier_matrix_providers::error::MatrixError;
use thiserror::Error;

/// Terminal failure of an optimization run. Infeasible assignments are NOT
/// an error: feasible routes are still returned alongside the explicit list
/// of unassigned delivery ids.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("invalid optimization input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("travel matrix fetch failed: {0}")]
    Matrix(#[from] MatrixError),
}

/// Input rejected before the matrix fetch is attempted.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("at least one vehicle is required")]
    NoVehicles,

    #[error("at least one delivery is required")]
    NoDeliveries,

    #[error("coordinates must be finite")]
    NonFiniteCoordinate,

    #[error("delivery {id} has a negative demand")]
    NegativeDemand { id: String },

    #[error("vehicle {id} has a negative capacity")]
    NegativeCapacity { id: String },

    #[error("vehicle {id} has a negative fuel rate")]
    NegativeFuelRate { id: String },

    #[error("delivery id {id} is not unique")]
    DuplicateDeliveryId { id: String },

    #[error("vehicle id {id} is not unique")]
    DuplicateVehicleId { id: String },
}
