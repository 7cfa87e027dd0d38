pub mod integrator;
pub mod solver;
pub mod stepper;
pub mod event;

pub use event::{LandingObserver, LANDING_MESSAGE};
pub use integrator::euler_step;
pub use solver::{solve, solve_recorded, solve_with, FlightReport};
pub use stepper::{StepResult, TrajectoryStepper};

use tracing::warn;

use crate::dynamics::state::{LaunchParameters, SimConfig};
use crate::error::SimError;

/// Reject parameters the acceleration law cannot handle.
pub fn check_parameters(params: &LaunchParameters, config: &SimConfig) -> Result<(), SimError> {
    let mass = params.mass();
    if !mass.is_finite() || mass.abs() < config.min_mass {
        warn!(mass, min_mass = config.min_mass, "rejecting degenerate mass");
        return Err(SimError::DegenerateParameters { mass });
    }
    Ok(())
}
