//! Fuel and mixture errors.

use cb_core::CoreError;
use thiserror::Error;

/// Result type for fuel operations.
pub type FuelResult<T> = Result<T, FuelError>;

/// Errors raised while building catalogs and mixtures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuelError {
    /// A fuel record carries unusable data (molar mass, elements, ash...).
    #[error("Invalid fuel '{fuel}': {reason}")]
    InvalidFuel { fuel: String, reason: &'static str },

    /// Mixture has no components.
    #[error("Mixture has no components")]
    EmptyMixture,

    /// A component percentage is non-finite or outside [0, 100].
    #[error("Invalid percentage {percentage} for fuel '{fuel}'")]
    InvalidPercentage { fuel: String, percentage: f64 },

    /// Percentages do not add up to 100.
    #[error("Mixture percentages sum to {sum}, expected 100 ± {tolerance}")]
    Imbalance { sum: f64, tolerance: f64 },

    /// Mixture combines gaseous and condensed-phase fuels.
    #[error("Mixture combines gas and liquid/solid fuels")]
    MixedPhases,

    /// Mole fractions could not be formed (no combustible matter).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Duplicate fuel id: {id}")]
    DuplicateId { id: String },

    #[error("Unknown fuel: {id}")]
    UnknownFuel { id: String },

    /// Catalog file could not be read.
    #[error("Failed to read fuel catalog {path}: {message}")]
    Io { path: String, message: String },

    /// Catalog contents could not be parsed.
    #[error("Failed to parse fuel catalog: {message}")]
    Parse { message: String },
}

impl From<CoreError> for FuelError {
    fn from(err: CoreError) -> Self {
        FuelError::NonPhysical { what: err.what() }
    }
}

impl From<serde_json::Error> for FuelError {
    fn from(err: serde_json::Error) -> Self {
        FuelError::Parse {
            message: err.to_string(),
        }
    }
}
