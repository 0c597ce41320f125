//! Error types for harness operations.

use thiserror::Error;

/// Errors encountered while driving component evaluations.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sf_components::ComponentError> for SimError {
    fn from(e: sf_components::ComponentError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<sf_air::AirError> for SimError {
    fn from(e: sf_air::AirError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
