//! Time-stepped evaluation harness for setflow components.
//!
//! The components themselves are algebraic: a host solver evaluates them
//! once per iteration. This crate provides the thin driver used in tests and
//! examples in place of a full equation-based environment:
//! - Piecewise boundary-condition profiles (constant, step, ramp)
//! - Optional first-order setpoint response filter
//! - Fixed-step run loop with decimated recording

pub mod error;
pub mod filter;
pub mod profile;
pub mod sim;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use filter::{FilterState, FirstOrderFilter};
pub use profile::Profile;
pub use sim::{Boundary, SimOptions, SimRecord, run_sim};
