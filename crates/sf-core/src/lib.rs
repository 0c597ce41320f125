//! sf-core: stable foundation for setflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - smoothing (differentiable min/max/clamp regularizations)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod smoothing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use smoothing::*;
pub use units::*;
