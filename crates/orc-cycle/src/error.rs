//! Error types for cycle evaluation.

use orc_core::CoreError;
use orc_fluids::FluidError;
use thiserror::Error;

/// Errors that abort a cycle evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical result: {what}")]
    NonPhysical { what: &'static str },

    #[error("Fluid property error: {0}")]
    Fluid(#[from] FluidError),
}

pub type CycleResult<T> = Result<T, CycleError>;

impl From<CoreError> for CycleError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, .. } => CycleError::InvalidArg { what },
            CoreError::OutOfRange { what, .. } => CycleError::InvalidArg { what },
            CoreError::InvalidArg { what } => CycleError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CycleError::NonPhysical {
            what: "net specific work is zero",
        };
        assert!(err.to_string().contains("net specific work"));
    }

    #[test]
    fn fluid_error_conversion() {
        let fluid_err = FluidError::Backend {
            message: "no such state".to_string(),
        };
        let err: CycleError = fluid_err.into();
        assert!(matches!(err, CycleError::Fluid(_)));
        assert!(err.to_string().contains("no such state"));
    }

    #[test]
    fn core_error_conversion() {
        let err: CycleError = CoreError::OutOfRange {
            what: "pump efficiency",
            value: 1.5,
        }
        .into();
        assert_eq!(
            err,
            CycleError::InvalidArg {
                what: "pump efficiency"
            }
        );
    }
}
