//! Ideal conditioning of an air stream toward prescribed outlet conditions.
//!
//! [`PrescribedOutlet`] wraps one capacity-limited setpoint channel around
//! each conditioned quantity of a moist-air stream:
//!
//! - the temperature channel tracks a temperature setpoint in specific
//!   enthalpy terms, bounded by heating/cooling capacities in watts;
//! - the humidity channel tracks a water mass-fraction setpoint directly,
//!   bounded by humidification/dehumidification capacities in kg/s.
//!
//! Each channel's setpoint source is fixed at construction: a runtime input,
//! a constant, or off (the quantity passes through unchanged). Evaluation is
//! a pure function of the inlet state, the mass flow, and the setpoint
//! inputs, so independent instances can be evaluated in parallel.

use serde::{Deserialize, Serialize};

use crate::common::{DELTA_M, M_FLOW_SMALL, check_finite, nonzero_flow, positive_flow};
use crate::error::{ComponentError, ComponentResult};
use crate::limiter::{SetpointRequest, SetpointResult};
use sf_air::{AirState, properties};
use sf_core::numeric::Real;
use sf_core::units::{MassRate, Power, Temperature, k, kgps, w};

/// Where a conditioned channel's setpoint comes from.
///
/// Resolved once at construction; `Fixed` stores the fallback literal in the
/// channel's own unit (kelvin for the temperature channel, mass fraction for
/// the humidity channel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SetpointSource {
    /// Follow the value supplied with each evaluation.
    Tracked,
    /// Hold a constant chosen at construction.
    Fixed { value: Real },
    /// Leave the channel's quantity unchanged (no exchange).
    Off,
}

/// Runtime setpoint inputs. Only channels configured as
/// [`SetpointSource::Tracked`] read them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Setpoints {
    /// Temperature setpoint for the temperature channel.
    pub temperature: Option<Temperature>,
    /// Water mass-fraction setpoint for the humidity channel.
    pub water_fraction: Option<Real>,
}

/// Result of one outlet evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutletConditions {
    /// Deliverable outlet state.
    pub outlet: AirState,
    /// Heat rate added to the stream (negative when cooling).
    pub q_flow: Power,
    /// Water vapor mass flow added to the stream (negative when drying).
    pub mwat_flow: MassRate,
}

/// Ideal heater/cooler/humidifier with capacity-limited setpoint tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescribedOutlet {
    name: String,
    /// Setpoint source for the temperature channel.
    pub temperature_setpoint: SetpointSource,
    /// Setpoint source for the humidity channel.
    pub humidity_setpoint: SetpointSource,
    /// Maximum heat rate the temperature channel can add [W]. Positive
    /// infinity means unlimited heating.
    pub heat_flow_max: Power,
    /// Minimum heat rate (most negative; cooling) [W]. Negative infinity
    /// means unlimited cooling.
    pub heat_flow_min: Power,
    /// Maximum water vapor mass flow the humidity channel can add [kg/s].
    pub water_flow_max: MassRate,
    /// Minimum water vapor mass flow (most negative; drying) [kg/s].
    pub water_flow_min: MassRate,
    /// Mass flow floor used when dividing capacities [kg/s].
    pub m_flow_small: Real,
    /// Smoothing width of the positive-flow floor [kg/s].
    pub delta_m: Real,
    /// Smoothing width of the enthalpy channel limiting [J/kg].
    pub delta_h: Real,
    /// Smoothing width of the humidity channel limiting [kg/kg].
    pub delta_x: Real,
}

impl PrescribedOutlet {
    /// Create an outlet that tracks a temperature setpoint input, leaves
    /// humidity unchanged, and has unlimited capacity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temperature_setpoint: SetpointSource::Tracked,
            humidity_setpoint: SetpointSource::Off,
            heat_flow_max: w(f64::INFINITY),
            heat_flow_min: w(f64::NEG_INFINITY),
            water_flow_max: kgps(f64::INFINITY),
            water_flow_min: kgps(f64::NEG_INFINITY),
            m_flow_small: M_FLOW_SMALL,
            delta_m: DELTA_M,
            delta_h: 10.0,
            delta_x: 1e-5,
        }
    }

    /// Component name for debugging and identification.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hold the temperature setpoint at a constant.
    pub fn with_fixed_temperature(mut self, t: Temperature) -> Self {
        self.temperature_setpoint = SetpointSource::Fixed { value: t.value };
        self
    }

    /// Disable the temperature channel; the enthalpy passes through.
    pub fn without_temperature_control(mut self) -> Self {
        self.temperature_setpoint = SetpointSource::Off;
        self
    }

    /// Track a water mass-fraction setpoint input.
    pub fn with_humidity_tracking(mut self) -> Self {
        self.humidity_setpoint = SetpointSource::Tracked;
        self
    }

    /// Hold the water mass-fraction setpoint at a constant.
    pub fn with_fixed_humidity(mut self, x_w: Real) -> ComponentResult<Self> {
        if !x_w.is_finite() || !(0.0..1.0).contains(&x_w) {
            return Err(ComponentError::InvalidArg {
                what: "fixed water fraction must be in [0, 1)",
            });
        }
        self.humidity_setpoint = SetpointSource::Fixed { value: x_w };
        Ok(self)
    }

    /// Bound the heat rate of the temperature channel.
    ///
    /// Either bound may be infinite to leave that side unlimited.
    pub fn with_heat_limits(mut self, min: Power, max: Power) -> ComponentResult<Self> {
        if min.value.is_nan() || max.value.is_nan() || min.value > 0.0 || max.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "heat limits must satisfy min <= 0 <= max",
            });
        }
        self.heat_flow_min = min;
        self.heat_flow_max = max;
        Ok(self)
    }

    /// Bound the water vapor mass flow of the humidity channel.
    pub fn with_water_limits(mut self, min: MassRate, max: MassRate) -> ComponentResult<Self> {
        if min.value.is_nan() || max.value.is_nan() || min.value > 0.0 || max.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "water limits must satisfy min <= 0 <= max",
            });
        }
        self.water_flow_min = min;
        self.water_flow_max = max;
        Ok(self)
    }

    /// Override the regularization parameters.
    pub fn with_regularization(
        mut self,
        m_flow_small: Real,
        delta_m: Real,
        delta_h: Real,
        delta_x: Real,
    ) -> ComponentResult<Self> {
        for (v, what) in [
            (m_flow_small, "m_flow_small must be positive and finite"),
            (delta_m, "delta_m must be positive and finite"),
            (delta_h, "delta_h must be positive and finite"),
            (delta_x, "delta_x must be positive and finite"),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ComponentError::InvalidArg { what });
            }
        }
        self.m_flow_small = m_flow_small;
        self.delta_m = delta_m;
        self.delta_h = delta_h;
        self.delta_x = delta_x;
        Ok(self)
    }

    /// Compute the deliverable outlet conditions for one evaluation.
    ///
    /// Pure per call: no internal state is read or written.
    pub fn evaluate(
        &self,
        inlet: &AirState,
        m_flow: MassRate,
        setpoints: &Setpoints,
    ) -> ComponentResult<OutletConditions> {
        check_finite(m_flow.value, "m_flow")?;
        let m_pos = positive_flow(m_flow.value, self.delta_m);
        let m_nz = nonzero_flow(m_flow.value, self.m_flow_small);

        let h_in = inlet.specific_enthalpy();
        let x_in = inlet.water_fraction();

        // Humidity channel: the water fraction is the transported quantity,
        // bounded by water vapor mass flows.
        let water = match setpoint_for(
            self.humidity_setpoint,
            setpoints.water_fraction,
            "water fraction setpoint input",
        )? {
            None => passthrough(x_in),
            Some(x_set) => SetpointRequest {
                desired_value: x_set,
                inlet_value: x_in,
                positive_flow: m_pos,
                nonzero_flow: m_nz,
                max_capacity_positive: self.water_flow_max.value,
                max_capacity_negative: self.water_flow_min.value,
                max_limit_active: self.water_flow_max.value.is_finite(),
                min_limit_active: self.water_flow_min.value.is_finite(),
                smoothing_width: self.delta_x,
            }
            .evaluate(),
        };

        // Temperature channel, tracked in enthalpy terms so the exchanged
        // flow comes out as a heat rate. The enthalpy target is evaluated at
        // the inlet water fraction even when the humidity channel changes
        // the fraction.
        // TODO: evaluate the target at the conditioned water fraction once
        // the humidity channel result is available here.
        let heat = match setpoint_for(
            self.temperature_setpoint,
            setpoints.temperature.map(|t| t.value),
            "temperature setpoint input",
        )? {
            None => passthrough(h_in),
            Some(t_set) => {
                let h_set = properties::specific_enthalpy(k(t_set), x_in);
                SetpointRequest {
                    desired_value: h_set,
                    inlet_value: h_in,
                    positive_flow: m_pos,
                    nonzero_flow: m_nz,
                    max_capacity_positive: self.heat_flow_max.value,
                    max_capacity_negative: self.heat_flow_min.value,
                    max_limit_active: self.heat_flow_max.value.is_finite(),
                    min_limit_active: self.heat_flow_min.value.is_finite(),
                    smoothing_width: self.delta_h,
                }
                .evaluate()
            }
        };

        let outlet = AirState::from_hx(heat.actual_value, water.actual_value)?;
        Ok(OutletConditions {
            outlet,
            q_flow: w(heat.applied_flow),
            mwat_flow: kgps(water.applied_flow),
        })
    }
}

/// Resolve a channel's setpoint, or `None` for an off channel.
fn setpoint_for(
    source: SetpointSource,
    input: Option<Real>,
    what: &'static str,
) -> ComponentResult<Option<Real>> {
    match source {
        SetpointSource::Off => Ok(None),
        SetpointSource::Fixed { value } => Ok(Some(value)),
        SetpointSource::Tracked => input
            .map(Some)
            .ok_or(ComponentError::MissingInput { what }),
    }
}

/// Channel result for an off channel: the quantity passes through exactly.
fn passthrough(inlet_value: Real) -> SetpointResult {
    SetpointResult {
        actual_value: inlet_value,
        applied_flow: 0.0,
        actual_delta: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_air::properties::CP_AIR;
    use sf_core::units::c;

    fn inlet() -> AirState {
        AirState::from_tx(k(290.0), 0.0).unwrap()
    }

    #[test]
    fn tracked_channel_requires_input() {
        let outlet = PrescribedOutlet::new("heater");
        let err = outlet
            .evaluate(&inlet(), kgps(1.0), &Setpoints::default())
            .unwrap_err();
        assert!(matches!(err, ComponentError::MissingInput { .. }));
    }

    #[test]
    fn unlimited_tracking_reaches_setpoint() {
        let outlet = PrescribedOutlet::new("heater");
        let setpoints = Setpoints {
            temperature: Some(k(300.0)),
            ..Default::default()
        };
        let res = outlet.evaluate(&inlet(), kgps(1.0), &setpoints).unwrap();
        assert!((res.outlet.temperature().value - 300.0).abs() < 1e-9);
        // Dry air: Q = m * cp * dT, and m is only epsilon-regularized.
        assert!((res.q_flow.value - 10.0 * CP_AIR).abs() < 1.0);
        assert_eq!(res.mwat_flow.value, 0.0);
        assert_eq!(res.outlet.water_fraction(), 0.0);
    }

    #[test]
    fn fixed_setpoint_ignores_input() {
        let outlet = PrescribedOutlet::new("heater").with_fixed_temperature(c(22.0));
        let res = outlet
            .evaluate(&inlet(), kgps(1.0), &Setpoints::default())
            .unwrap();
        assert!((res.outlet.temperature().value - 295.15).abs() < 1e-9);
    }

    #[test]
    fn off_channels_pass_through_exactly() {
        let outlet = PrescribedOutlet::new("duct").without_temperature_control();
        let state = AirState::from_tx(k(287.3), 0.004).unwrap();
        let res = outlet
            .evaluate(&state, kgps(0.7), &Setpoints::default())
            .unwrap();
        assert_eq!(res.outlet, state);
        assert_eq!(res.q_flow.value, 0.0);
        assert_eq!(res.mwat_flow.value, 0.0);
    }

    #[test]
    fn heating_saturates_at_capacity() {
        // Capacity for half the desired 10 K rise at 1 kg/s of dry air.
        let q_half = 5.0 * CP_AIR;
        let outlet = PrescribedOutlet::new("coil")
            .with_heat_limits(w(f64::NEG_INFINITY), w(q_half))
            .unwrap();
        let setpoints = Setpoints {
            temperature: Some(k(300.0)),
            ..Default::default()
        };
        let res = outlet.evaluate(&inlet(), kgps(1.0), &setpoints).unwrap();
        // Rise of ~5 K, not 10 K; smoothing allows a small shortfall.
        assert!((res.outlet.temperature().value - 295.0).abs() < 0.05);
        assert!(res.q_flow.value <= q_half + 1e-6);
    }

    #[test]
    fn cooling_saturates_at_capacity() {
        let q_half = 5.0 * CP_AIR;
        let outlet = PrescribedOutlet::new("coil")
            .with_heat_limits(w(-q_half), w(f64::INFINITY))
            .unwrap();
        let setpoints = Setpoints {
            temperature: Some(k(280.0)),
            ..Default::default()
        };
        let res = outlet.evaluate(&inlet(), kgps(1.0), &setpoints).unwrap();
        assert!((res.outlet.temperature().value - 285.0).abs() < 0.05);
        assert!(res.q_flow.value >= -q_half - 1e-6);
    }

    #[test]
    fn humidification_saturates_at_capacity() {
        let outlet = PrescribedOutlet::new("humidifier")
            .without_temperature_control()
            .with_humidity_tracking()
            .with_water_limits(kgps(f64::NEG_INFINITY), kgps(0.003))
            .unwrap();
        let state = AirState::from_tx(k(293.15), 0.002).unwrap();
        let setpoints = Setpoints {
            water_fraction: Some(0.008),
            ..Default::default()
        };
        let res = outlet.evaluate(&state, kgps(1.0), &setpoints).unwrap();
        // Desired +0.006, capacity allows +0.003 at 1 kg/s.
        assert!((res.outlet.water_fraction() - 0.005).abs() < 1e-4);
        assert!(res.mwat_flow.value <= 0.003 + 1e-9);
    }

    #[test]
    fn reverse_flow_reports_no_exchange() {
        let outlet = PrescribedOutlet::new("coil")
            .with_heat_limits(w(-1e4), w(1e4))
            .unwrap();
        let setpoints = Setpoints {
            temperature: Some(k(300.0)),
            ..Default::default()
        };
        let res = outlet.evaluate(&inlet(), kgps(-0.5), &setpoints).unwrap();
        assert!(res.q_flow.value.abs() < 1.0);
    }

    #[test]
    fn config_validation() {
        assert!(
            PrescribedOutlet::new("bad")
                .with_heat_limits(w(1.0), w(100.0))
                .is_err()
        );
        assert!(
            PrescribedOutlet::new("bad")
                .with_water_limits(kgps(-0.1), kgps(-0.01))
                .is_err()
        );
        assert!(
            PrescribedOutlet::new("bad")
                .with_fixed_humidity(1.5)
                .is_err()
        );
        assert!(
            PrescribedOutlet::new("bad")
                .with_regularization(0.0, 1e-4, 10.0, 1e-5)
                .is_err()
        );
        assert!(
            PrescribedOutlet::new("ok")
                .with_regularization(1e-5, 1e-5, 1.0, 1e-6)
                .is_ok()
        );
    }

    #[test]
    fn non_finite_flow_is_rejected() {
        let outlet = PrescribedOutlet::new("coil");
        let setpoints = Setpoints {
            temperature: Some(k(300.0)),
            ..Default::default()
        };
        assert!(
            outlet
                .evaluate(&inlet(), kgps(f64::NAN), &setpoints)
                .is_err()
        );
    }
}
