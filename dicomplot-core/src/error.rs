//! Error types for dicomplot-core.

use thiserror::Error;

/// Result type alias for dicomplot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for plan construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A plan must contain at least one field.
    #[error("plan contains no fields")]
    EmptyPlan,

    /// Every field must contain at least one energy layer.
    #[error("field {field} contains no energy layers")]
    EmptyField { field: usize },

    /// Position map does not hold exactly one X/Y pair per weight.
    #[error("spot count mismatch: {positions} position values for {weights} weights")]
    SpotCountMismatch { positions: usize, weights: usize },
}
