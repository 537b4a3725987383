//! Engine errors.

use cb_core::CoreError;
use cb_fuels::FuelError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Terminal failures of a single `compute` call. No partial result is ever
/// returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A referenced fuel is missing a required field or carries unusable data.
    #[error("Invalid fuel data: {reason}")]
    InvalidFuelData { reason: String },

    /// Component percentages do not sum to 100 within tolerance.
    #[error("Mixture percentages sum to {sum:.4}, expected 100 ± {tolerance}")]
    MixtureImbalance { sum: f64, tolerance: f64 },

    /// A process-condition (or engine constant) is non-finite or out of range.
    #[error("Invalid process conditions: {field}: {reason}")]
    InvalidProcessConditions { field: &'static str, reason: String },

    /// Stoichiometric oxygen demand is not positive.
    #[error("Invalid fuel composition: stoichiometric O2 demand {o2_demand} mol/mol is not positive")]
    InvalidFuelComposition { o2_demand: f64 },

    /// A derived divisor was zero or a derived value was non-finite.
    #[error("Degenerate computation: {what}")]
    ComputationDegenerate { what: &'static str },
}

impl EngineError {
    pub(crate) fn conditions(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProcessConditions {
            field,
            reason: reason.into(),
        }
    }

    /// Map a range/finiteness failure on an input field.
    pub(crate) fn from_input(err: CoreError) -> Self {
        Self::InvalidProcessConditions {
            field: err.what(),
            reason: err.to_string(),
        }
    }

    /// Map a failure on a derived quantity.
    pub(crate) fn degenerate(err: CoreError) -> Self {
        Self::ComputationDegenerate { what: err.what() }
    }
}

impl From<FuelError> for EngineError {
    fn from(err: FuelError) -> Self {
        match err {
            FuelError::Imbalance { sum, tolerance } => {
                EngineError::MixtureImbalance { sum, tolerance }
            }
            FuelError::NonPhysical { what } => EngineError::ComputationDegenerate { what },
            other => EngineError::InvalidFuelData {
                reason: other.to_string(),
            },
        }
    }
}
