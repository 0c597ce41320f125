//! Error types for component operations.

use sf_air::AirError;
use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Missing input: {what}")]
    MissingInput { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<AirError> for ComponentError {
    fn from(e: AirError) -> Self {
        match e {
            AirError::NonPhysical { what } => ComponentError::NonPhysical { what },
        }
    }
}
