pub mod physics;
pub mod dynamics;
pub mod sim;
pub mod io;
pub mod config;
pub mod error;

pub use error::SimError;

// Flat re-exports for callers that only need the engine surface
pub mod types {
    pub use crate::dynamics::state::{
        KinematicState, LaunchParameters, SimConfig, TrajectorySample, DEFAULT_DRAG,
    };
    pub use crate::physics::gravity::G;
    pub use crate::sim::solver::FlightReport;
    pub use crate::sim::stepper::{StepResult, TrajectoryStepper};
}
