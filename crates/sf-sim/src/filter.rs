//! First-order setpoint response filter.

use crate::error::{SimError, SimResult};

/// State of a first-order filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterState {
    /// Current filtered value
    pub value: f64,
}

/// First-order lag applied to a setpoint signal.
///
/// Dynamics: dvalue/dt = (input - value) / tau. A time constant of zero
/// means direct feedthrough (the filter tracks its input exactly), matching
/// equipment that responds within one step.
#[derive(Clone, Copy, Debug)]
pub struct FirstOrderFilter {
    /// Time constant (seconds), non-negative
    pub tau: f64,
}

impl FirstOrderFilter {
    /// Create a new first-order filter.
    pub fn new(tau: f64) -> SimResult<Self> {
        if !tau.is_finite() || tau < 0.0 {
            return Err(SimError::InvalidArg {
                what: "tau must be non-negative and finite",
            });
        }
        Ok(Self { tau })
    }

    /// Advance state by dt toward the input.
    ///
    /// Uses the exact discrete solution of the lag so large steps do not
    /// overshoot.
    pub fn step(&self, state: &FilterState, dt: f64, input: f64) -> FilterState {
        if self.tau == 0.0 {
            return FilterState { value: input };
        }
        let alpha = (-dt / self.tau).exp();
        FilterState {
            value: input + (state.value - input) * alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tau_is_feedthrough() {
        let f = FirstOrderFilter::new(0.0).unwrap();
        let state = FilterState { value: 1.0 };
        assert_eq!(f.step(&state, 0.1, 7.0).value, 7.0);
    }

    #[test]
    fn converges_to_input() {
        let f = FirstOrderFilter::new(1.0).unwrap();
        let mut state = FilterState { value: 0.0 };
        for _ in 0..100 {
            state = f.step(&state, 0.5, 10.0);
        }
        assert!((state.value - 10.0).abs() < 1e-6);
    }

    #[test]
    fn one_time_constant_reaches_63_percent() {
        let f = FirstOrderFilter::new(2.0).unwrap();
        let state = FilterState { value: 0.0 };
        let after = f.step(&state, 2.0, 1.0);
        assert!((after.value - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn never_overshoots() {
        let f = FirstOrderFilter::new(0.01).unwrap();
        let state = FilterState { value: 0.0 };
        // Very large step relative to tau still lands on the input side.
        let after = f.step(&state, 10.0, 5.0);
        assert!(after.value <= 5.0);
        assert!(after.value > 4.99);
    }

    #[test]
    fn invalid_tau_rejected() {
        assert!(FirstOrderFilter::new(-1.0).is_err());
        assert!(FirstOrderFilter::new(f64::NAN).is_err());
    }
}
