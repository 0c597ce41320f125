//! Ideal moist-air enthalpy relations.
//!
//! Enthalpy is measured from liquid water and dry air at 0 °C, so dry air at
//! 0 °C has h = 0 and water vapor at 0 °C carries the latent heat of
//! vaporization. This matches the convention used by common building
//! simulation media models.

use sf_core::numeric::Real;
use sf_core::units::{Temperature, k};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Specific heat of dry air [J/(kg·K)]
pub const CP_AIR: SpecHeatCapacity = 1006.0;

/// Specific heat of water vapor [J/(kg·K)]
pub const CP_WATER_VAPOR: SpecHeatCapacity = 1860.0;

/// Latent heat of vaporization of water at 0 °C [J/kg]
pub const H_FG: SpecEnthalpy = 2_501_000.0;

/// Enthalpy reference temperature [K]
pub const T_REF_K: Real = 273.15;

/// Specific enthalpy of moist air per unit mass of the mixture.
///
/// `x_w` is the water mass fraction of the total (kg water / kg moist air).
#[inline]
pub fn specific_enthalpy(t: Temperature, x_w: Real) -> SpecEnthalpy {
    let dt = t.value - T_REF_K;
    (1.0 - x_w) * CP_AIR * dt + x_w * (CP_WATER_VAPOR * dt + H_FG)
}

/// Invert [`specific_enthalpy`] for temperature at a known water fraction.
///
/// Exact inverse of the linear relation; requires `x_w < 1` so the mixture
/// specific heat stays positive.
#[inline]
pub fn temperature_from_enthalpy(h: SpecEnthalpy, x_w: Real) -> Temperature {
    let cp_mix = (1.0 - x_w) * CP_AIR + x_w * CP_WATER_VAPOR;
    k((h - x_w * H_FG) / cp_mix + T_REF_K)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_air_reference_is_zero() {
        let h = specific_enthalpy(k(T_REF_K), 0.0);
        assert!(h.abs() < 1e-9);
    }

    #[test]
    fn vapor_carries_latent_heat_at_reference() {
        let x_w = 0.01;
        let h = specific_enthalpy(k(T_REF_K), x_w);
        assert!((h - x_w * H_FG).abs() < 1e-9);
    }

    #[test]
    fn dry_air_sensible_heating() {
        // 10 K of sensible heating of dry air
        let h = specific_enthalpy(k(T_REF_K + 10.0), 0.0);
        assert!((h - 10.0 * CP_AIR).abs() < 1e-9);
    }

    #[test]
    fn enthalpy_temperature_round_trip() {
        for &t_k in &[250.0, 273.15, 293.15, 310.0, 350.0] {
            for &x_w in &[0.0, 0.002, 0.01, 0.03] {
                let h = specific_enthalpy(k(t_k), x_w);
                let t_back = temperature_from_enthalpy(h, x_w);
                assert!(
                    (t_back.value - t_k).abs() < 1e-9,
                    "round trip failed at t={t_k}, x_w={x_w}"
                );
            }
        }
    }

    #[test]
    fn humid_air_is_more_energetic() {
        let t = k(300.0);
        assert!(specific_enthalpy(t, 0.01) > specific_enthalpy(t, 0.0));
    }
}
