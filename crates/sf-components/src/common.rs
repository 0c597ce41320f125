//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use sf_core::numeric::{Real, ensure_finite};
use sf_core::smoothing::smooth_max;

/// Default regularization floor for mass flow rate (kg/s)
pub const M_FLOW_SMALL: Real = 1e-4;

/// Default smoothing width for the positive-flow floor (kg/s)
pub const DELTA_M: Real = 1e-4;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: Real, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Mass flow floored at zero through a smooth max.
///
/// Reverse flow regularizes to (nearly) zero instead of going negative, so
/// exchanged flows computed from it never change sign with the stream.
pub fn positive_flow(m_flow: Real, delta_m: Real) -> Real {
    smooth_max(m_flow, 0.0, delta_m)
}

/// Mass flow floored away from zero.
///
/// Used as a divisor when converting capacity bounds into bounds on the
/// transported quantity; the floor keeps the division well-posed at zero or
/// reversed flow. `m_flow_small` must be positive, which is enforced where
/// components are configured, not here.
pub fn nonzero_flow(m_flow: Real, m_flow_small: Real) -> Real {
    m_flow.max(m_flow_small)
}
