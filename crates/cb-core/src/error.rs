use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value} (expected {expected})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl CoreError {
    /// Name of the offending field, if the error carries one.
    pub fn what(&self) -> &'static str {
        match self {
            Self::NonFinite { what, .. } | Self::OutOfRange { what, .. } => what,
            Self::InvalidArg { what } => what,
        }
    }
}
