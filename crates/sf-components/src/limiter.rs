//! Capacity-limited setpoint tracking.
//!
//! Given a desired value for a transported scalar (specific enthalpy for a
//! heater/cooler, water mass fraction for a humidifier), the limiter computes
//! the change the exchange capacity can actually sustain at the present flow
//! rate, and the exchanged flow that change implies. Limiting is smooth so
//! the relation stays differentiable for a gradient-based host solver.
//!
//! A single evaluation is closed form: no internal state, no iteration, and
//! no failure paths over the documented input domain. The caller is
//! responsible for the flow preconditioning described on
//! [`SetpointRequest::positive_flow`] and [`SetpointRequest::nonzero_flow`].

use crate::error::{ComponentError, ComponentResult};
use sf_core::numeric::Real;
use sf_core::smoothing::{smooth_limit, smooth_max, smooth_min};

/// Which capacity bounds constrain an evaluation.
///
/// Derived once per evaluation from the two active-limit flags, so the case
/// split is exhaustive and each arm applies exactly one limiting form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitMode {
    /// No bound: the desired change passes through exactly.
    Unconstrained,
    /// Only the upper capacity bound applies.
    UpperOnly,
    /// Only the lower capacity bound applies.
    LowerOnly,
    /// Both bounds apply.
    Both,
}

impl LimitMode {
    /// Select the mode from the two active-limit flags.
    pub fn from_flags(max_limit_active: bool, min_limit_active: bool) -> Self {
        match (max_limit_active, min_limit_active) {
            (false, false) => Self::Unconstrained,
            (true, false) => Self::UpperOnly,
            (false, true) => Self::LowerOnly,
            (true, true) => Self::Both,
        }
    }
}

/// Inputs for one limiter evaluation.
///
/// All values are plain SI reals; the limiter does not care whether the
/// transported quantity is an enthalpy [J/kg] or a mass fraction [kg/kg], as
/// long as the capacity bounds are expressed as flows of the same quantity
/// (e.g. [W] = [J/kg]·[kg/s], or [kg/s] = [kg/kg]·[kg/s]).
#[derive(Debug, Clone, Copy)]
pub struct SetpointRequest {
    /// Target value of the transported quantity at the outlet.
    pub desired_value: Real,
    /// Value of the transported quantity at the inlet.
    pub inlet_value: Real,
    /// Transport flow floored at zero (see [`crate::common::positive_flow`]).
    /// Scales the achieved change into the exchanged flow.
    pub positive_flow: Real,
    /// Transport flow floored away from zero (see
    /// [`crate::common::nonzero_flow`]). Divides the capacity bounds; passing
    /// exactly zero makes the result non-finite and is a caller contract
    /// violation, not a checked condition.
    pub nonzero_flow: Real,
    /// Upper bound on the exchanged flow. Must be finite when
    /// `max_limit_active` is set.
    pub max_capacity_positive: Real,
    /// Lower bound on the exchanged flow (non-positive). Must be finite when
    /// `min_limit_active` is set.
    pub max_capacity_negative: Real,
    /// Whether the upper capacity bound applies.
    pub max_limit_active: bool,
    /// Whether the lower capacity bound applies.
    pub min_limit_active: bool,
    /// Transition width of the smooth limiting, in units of the transported
    /// quantity. Must be positive; the deviation from hard clipping vanishes
    /// as the width goes to zero.
    pub smoothing_width: Real,
}

/// Result of one limiter evaluation.
///
/// Satisfies `actual_value = inlet_value + actual_delta` and
/// `applied_flow = positive_flow * actual_delta` by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointResult {
    /// Deliverable value of the transported quantity at the outlet.
    pub actual_value: Real,
    /// Exchanged flow of the quantity (heat rate or water mass flow).
    pub applied_flow: Real,
    /// Achieved change from inlet to outlet.
    pub actual_delta: Real,
}

impl SetpointRequest {
    /// Compute the deliverable outlet value and the exchanged flow.
    ///
    /// The desired change `desired_value - inlet_value` is smoothly clipped
    /// to the interval the capacity bounds allow at the present flow,
    /// `[max_capacity_negative / nonzero_flow, max_capacity_positive /
    /// nonzero_flow]`, with only the active sides applied. With neither
    /// limit active the change passes through exactly.
    pub fn evaluate(&self) -> SetpointResult {
        let desired_delta = self.desired_value - self.inlet_value;

        let actual_delta = match LimitMode::from_flags(self.max_limit_active, self.min_limit_active)
        {
            LimitMode::Unconstrained => desired_delta,
            LimitMode::UpperOnly => smooth_min(
                desired_delta,
                self.max_capacity_positive / self.nonzero_flow,
                self.smoothing_width,
            ),
            LimitMode::LowerOnly => smooth_max(
                desired_delta,
                self.max_capacity_negative / self.nonzero_flow,
                self.smoothing_width,
            ),
            LimitMode::Both => smooth_limit(
                desired_delta,
                self.max_capacity_negative / self.nonzero_flow,
                self.max_capacity_positive / self.nonzero_flow,
                self.smoothing_width,
            ),
        };

        SetpointResult {
            actual_value: self.inlet_value + actual_delta,
            applied_flow: self.positive_flow * actual_delta,
            actual_delta,
        }
    }

    /// Validate the caller-side preconditions that `evaluate` assumes.
    ///
    /// `evaluate` itself never fails; this helper exists for callers that
    /// want to surface a contract violation as an error instead of a
    /// non-finite result.
    pub fn check(&self) -> ComponentResult<()> {
        if !(self.nonzero_flow > 0.0) || !self.nonzero_flow.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "nonzero_flow must be positive and finite",
            });
        }
        if !(self.positive_flow >= 0.0) || !self.positive_flow.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "positive_flow must be non-negative and finite",
            });
        }
        if !(self.smoothing_width > 0.0) {
            return Err(ComponentError::InvalidArg {
                what: "smoothing_width must be positive",
            });
        }
        if self.max_limit_active && !self.max_capacity_positive.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "active upper capacity bound must be finite",
            });
        }
        if self.min_limit_active && !self.max_capacity_negative.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "active lower capacity bound must be finite",
            });
        }
        Ok(())
    }
}
