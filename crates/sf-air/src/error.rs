//! Error types for moist-air property calculations.

use thiserror::Error;

/// Errors that can occur when constructing states or evaluating properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type AirResult<T> = Result<T, AirError>;
