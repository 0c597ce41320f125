//! sf-air: moist-air property calculations for setflow.
//!
//! Provides:
//! - Ideal moist-air enthalpy relations (linear in temperature)
//! - Moist-air state representation (temperature + water mass fraction)
//! - Property errors
//!
//! The relations here treat humid air as an ideal mixture of dry air and
//! water vapor with constant specific heats, the usual simplification for
//! building energy simulation. Properties are per unit mass of moist air,
//! with humidity expressed as the water mass fraction of the total.

pub mod error;
pub mod properties;
pub mod state;

// Re-exports for ergonomics
pub use error::{AirError, AirResult};
pub use properties::{
    CP_AIR, CP_WATER_VAPOR, H_FG, SpecEnthalpy, SpecHeatCapacity, specific_enthalpy,
    temperature_from_enthalpy,
};
pub use state::AirState;
