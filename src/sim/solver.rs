use serde::Serialize;
use tracing::{debug, info, warn};

use super::check_parameters;
use super::event::{LandingObserver, Silent, LANDING_MESSAGE};
use super::integrator::euler_step;
use crate::dynamics::state::{KinematicState, LaunchParameters, SimConfig, TrajectorySample};
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Flight report
// ---------------------------------------------------------------------------

/// Summary scalars of a completed flight.
///
/// `range` and `flight_time` are taken at the first step below ground, not at
/// an interpolated zero crossing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightReport {
    pub range: f64,      // m
    pub max_height: f64, // m
    pub flight_time: f64, // s
    pub steps: u64,
}

// ---------------------------------------------------------------------------
// Batch solve
// ---------------------------------------------------------------------------

/// Integrate from launch to the first sample below ground.
pub fn solve(params: &LaunchParameters, config: &SimConfig) -> Result<FlightReport, SimError> {
    solve_with(params, config, &mut Silent)
}

/// Like [`solve`], announcing the landing to `observer` once on success.
pub fn solve_with(
    params: &LaunchParameters,
    config: &SimConfig,
    observer: &mut dyn LandingObserver,
) -> Result<FlightReport, SimError> {
    let report = integrate(params, config, |_| {})?;
    observer.on_landed(LANDING_MESSAGE);
    Ok(report)
}

/// Solve and keep every visited sample, starting with the launch point.
pub fn solve_recorded(
    params: &LaunchParameters,
    config: &SimConfig,
) -> Result<(Vec<TrajectorySample>, FlightReport), SimError> {
    let mut samples = Vec::new();
    let report = integrate(params, config, |s| samples.push(s.sample()))?;
    Ok((samples, report))
}

fn integrate<F>(
    params: &LaunchParameters,
    config: &SimConfig,
    mut visit: F,
) -> Result<FlightReport, SimError>
where
    F: FnMut(&KinematicState),
{
    check_parameters(params, config)?;
    debug!(?params, max_steps = config.max_steps, "solving trajectory");

    let mut state = KinematicState::launch(params);
    let mut max_height = 0.0_f64;
    let mut steps = 0_u64;
    visit(&state);

    while !state.is_below_ground() {
        if steps >= config.max_steps {
            warn!(steps, time = state.time, y = state.pos.y, "iteration cap reached");
            return Err(SimError::NonTerminating { steps });
        }
        max_height = max_height.max(state.pos.y);
        state = euler_step(&state, params);
        steps += 1;
        visit(&state);
    }

    let report = FlightReport {
        range: state.pos.x,
        max_height,
        flight_time: state.time,
        steps,
    };
    info!(
        range = report.range,
        max_height = report.max_height,
        flight_time = report.flight_time,
        steps,
        "landed"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
