//! sf-components: capacity-limited conditioning components for setflow.
//!
//! Provides the building blocks for prescribing the outlet state of an air
//! stream:
//! - A smooth capacity-limited setpoint limiter (the numerical core)
//! - The `PrescribedOutlet` component applying one limiter per conditioned
//!   channel (temperature via enthalpy, humidity via water mass fraction)
//!
//! All components are deterministic functions of their inputs and carry no
//! internal state, so a host solver may evaluate independent instances in
//! parallel at every iteration.
//!
//! # Example
//!
//! ```
//! use sf_air::AirState;
//! use sf_components::{PrescribedOutlet, Setpoints};
//! use sf_core::units::{k, kgps, w};
//!
//! // Heater with a 3 kW capacity.
//! let coil = PrescribedOutlet::new("heating_coil")
//!     .with_heat_limits(w(0.0), w(3_000.0))
//!     .unwrap();
//!
//! let inlet = AirState::from_tx(k(290.0), 0.004).unwrap();
//! let setpoints = Setpoints {
//!     temperature: Some(k(295.0)),
//!     ..Default::default()
//! };
//!
//! let res = coil.evaluate(&inlet, kgps(0.5), &setpoints).unwrap();
//! assert!(res.outlet.temperature().value > 290.0);
//! assert!(res.q_flow.value <= 3_000.0);
//! ```

pub mod common;
pub mod error;
pub mod limiter;
pub mod outlet;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use limiter::{LimitMode, SetpointRequest, SetpointResult};
pub use outlet::{OutletConditions, PrescribedOutlet, SetpointSource, Setpoints};
