//! Differentiable regularizations of min/max/clamp.
//!
//! Component models in this library are meant to be evaluated inside a
//! continuous-time host solver, so hard kinks in `min`/`max`/`clamp` are
//! replaced by C¹ approximations with a tunable transition width.
//!
//! All three functions satisfy:
//! - exact agreement with the hard form when `width == 0`;
//! - absolute deviation bounded by `width / 2` per regularized kink, largest
//!   at the transition point and decaying quadratically away from it;
//! - monotonicity in the limited argument;
//! - continuous first derivative for any `width > 0`.

use crate::numeric::Real;

/// Differentiable approximation of `a.max(b)`.
///
/// Always at least `max(a, b)`, and at most `max(a, b) + width / 2`.
#[inline]
pub fn smooth_max(a: Real, b: Real, width: Real) -> Real {
    let d = a - b;
    0.5 * (a + b + (d * d + width * width).sqrt())
}

/// Differentiable approximation of `a.min(b)`.
///
/// Always at most `min(a, b)`, and at least `min(a, b) - width / 2`.
#[inline]
pub fn smooth_min(a: Real, b: Real, width: Real) -> Real {
    let d = a - b;
    0.5 * (a + b - (d * d + width * width).sqrt())
}

/// Differentiable approximation of `x.clamp(lower, upper)`.
///
/// Composition of [`smooth_max`] against the lower bound and [`smooth_min`]
/// against the upper bound, so the total deviation from the hard clamp is at
/// most `width`. Both bounds must be finite and satisfy `lower <= upper`;
/// bounds closer together than a few widths will visibly interact.
#[inline]
pub fn smooth_limit(x: Real, lower: Real, upper: Real, width: Real) -> Real {
    smooth_min(smooth_max(x, lower, width), upper, width)
}
