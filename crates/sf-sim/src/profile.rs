//! Piecewise boundary-condition profiles.

use serde::{Deserialize, Serialize};

/// Scalar boundary signal sampled by time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Profile {
    /// Constant value for all times.
    Constant {
        /// Signal value.
        value: f64,
    },

    /// Step change at a given time.
    Step {
        /// Time of the step (seconds).
        time: f64,
        /// Value for `t < time`.
        before: f64,
        /// Value for `t >= time`.
        after: f64,
    },

    /// Linear ramp between two times, held constant outside them.
    Ramp {
        /// Ramp start time (seconds).
        start_time: f64,
        /// Ramp end time (seconds), must be greater than `start_time`.
        end_time: f64,
        /// Value at and before `start_time`.
        start_value: f64,
        /// Value at and after `end_time`.
        end_value: f64,
    },
}

impl Profile {
    /// Sample the profile at time `t`.
    pub fn sample(&self, t: f64) -> f64 {
        match *self {
            Self::Constant { value } => value,
            Self::Step {
                time,
                before,
                after,
            } => {
                if t < time {
                    before
                } else {
                    after
                }
            }
            Self::Ramp {
                start_time,
                end_time,
                start_value,
                end_value,
            } => {
                if t <= start_time {
                    start_value
                } else if t >= end_time {
                    end_value
                } else {
                    let frac = (t - start_time) / (end_time - start_time);
                    start_value + frac * (end_value - start_value)
                }
            }
        }
    }
}
