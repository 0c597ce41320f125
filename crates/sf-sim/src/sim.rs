//! Run loop and result recording.

use crate::error::{SimError, SimResult};
use crate::filter::{FilterState, FirstOrderFilter};
use crate::profile::Profile;
use sf_air::AirState;
use sf_components::{OutletConditions, PrescribedOutlet, Setpoints};
use sf_core::units::{k, kgps};
use tracing::{debug, trace};

/// Options for harness runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1.0,
            t_end: 3600.0,
            max_steps: 1_000_000,
            record_every: 10,
        }
    }
}

/// Boundary conditions driving the component.
#[derive(Clone, Debug)]
pub struct Boundary {
    /// Inlet air state, held constant over the run.
    pub inlet: AirState,
    /// Mass flow rate through the component (kg/s).
    pub m_flow: Profile,
    /// Temperature setpoint (K); required when the temperature channel
    /// tracks a runtime input.
    pub temperature_setpoint: Option<Profile>,
    /// Water mass-fraction setpoint; required when the humidity channel
    /// tracks a runtime input.
    pub water_setpoint: Option<Profile>,
}

/// Record of harness results.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// Outlet conditions at each recorded time
    pub rows: Vec<OutletConditions>,
}

/// Evaluate a prescribed outlet across a time span with fixed steps.
///
/// An optional first-order filter shapes the temperature setpoint before the
/// component sees it, standing in for equipment that approaches a new
/// setpoint over a time constant rather than instantly. The filter is
/// initialized at the setpoint's value at t = 0, so a run that starts at
/// steady conditions stays there.
pub fn run_sim(
    outlet: &PrescribedOutlet,
    boundary: &Boundary,
    filter: Option<FirstOrderFilter>,
    opts: &SimOptions,
) -> SimResult<SimRecord> {
    if opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.t_end < 0.0 {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let mut filter_state = boundary
        .temperature_setpoint
        .map(|p| FilterState { value: p.sample(0.0) });

    let mut t = 0.0;
    let mut row = evaluate_at(outlet, boundary, filter_state, t)?;

    let mut t_record = vec![t];
    let mut rows = vec![row];

    let mut step = 0;
    while t < opts.t_end && step < opts.max_steps {
        t += opts.dt;
        step += 1;

        // Advance the setpoint filter, then evaluate the algebraic component
        // at the new time.
        if let (Some(f), Some(state), Some(profile)) =
            (filter, filter_state, boundary.temperature_setpoint)
        {
            filter_state = Some(f.step(&state, opts.dt, profile.sample(t)));
        } else if let Some(profile) = boundary.temperature_setpoint {
            filter_state = Some(FilterState {
                value: profile.sample(t),
            });
        }

        row = evaluate_at(outlet, boundary, filter_state, t)?;
        trace!(t, q_flow = row.q_flow.value, mwat_flow = row.mwat_flow.value, "step");
        log_binding_limits(outlet, &row, t);

        if step % opts.record_every == 0 {
            t_record.push(t);
            rows.push(row);
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        rows.push(row);
    }

    Ok(SimRecord { t: t_record, rows })
}

fn evaluate_at(
    outlet: &PrescribedOutlet,
    boundary: &Boundary,
    filter_state: Option<FilterState>,
    t: f64,
) -> SimResult<OutletConditions> {
    let setpoints = Setpoints {
        temperature: filter_state.map(|s| k(s.value)),
        water_fraction: boundary.water_setpoint.map(|p| p.sample(t)),
    };
    let res = outlet.evaluate(&boundary.inlet, kgps(boundary.m_flow.sample(t)), &setpoints)?;
    Ok(res)
}

fn log_binding_limits(outlet: &PrescribedOutlet, row: &OutletConditions, t: f64) {
    let q = row.q_flow.value;
    let q_max = outlet.heat_flow_max.value;
    let q_min = outlet.heat_flow_min.value;
    if q_max.is_finite() && q_max > 0.0 && q >= 0.99 * q_max {
        debug!(t, q_flow = q, q_max, "heat capacity limit binding");
    }
    if q_min.is_finite() && q_min < 0.0 && q <= 0.99 * q_min {
        debug!(t, q_flow = q, q_min, "cooling capacity limit binding");
    }
}
