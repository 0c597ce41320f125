//! Moist-air state definitions.

use crate::error::{AirError, AirResult};
use crate::properties::{SpecEnthalpy, specific_enthalpy, temperature_from_enthalpy};
use sf_core::numeric::Real;
use sf_core::units::Temperature;

/// Moist-air state: temperature and water mass fraction.
///
/// This is the minimal set of independent properties for the ideal moist-air
/// relations in [`crate::properties`]; specific enthalpy is computed on
/// demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    t: Temperature,
    x_w: Real,
}

impl AirState {
    /// Create a state from temperature and water mass fraction.
    ///
    /// Validates that the temperature is positive and finite and that the
    /// water fraction lies in `[0, 1)`.
    pub fn from_tx(t: Temperature, x_w: Real) -> AirResult<Self> {
        let t_val = t.value;
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(AirError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !x_w.is_finite() || !(0.0..1.0).contains(&x_w) {
            return Err(AirError::NonPhysical {
                what: "water fraction must be in [0, 1)",
            });
        }
        Ok(Self { t, x_w })
    }

    /// Create a state from specific enthalpy and water mass fraction.
    pub fn from_hx(h: SpecEnthalpy, x_w: Real) -> AirResult<Self> {
        if !h.is_finite() {
            return Err(AirError::NonPhysical {
                what: "specific enthalpy must be finite",
            });
        }
        if !x_w.is_finite() || !(0.0..1.0).contains(&x_w) {
            return Err(AirError::NonPhysical {
                what: "water fraction must be in [0, 1)",
            });
        }
        Self::from_tx(temperature_from_enthalpy(h, x_w), x_w)
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get water mass fraction (kg water / kg moist air).
    pub fn water_fraction(&self) -> Real {
        self.x_w
    }

    /// Specific enthalpy of the mixture [J/kg].
    pub fn specific_enthalpy(&self) -> SpecEnthalpy {
        specific_enthalpy(self.t, self.x_w)
    }
}
