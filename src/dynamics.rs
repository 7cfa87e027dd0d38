pub mod state;

pub use state::{KinematicState, LaunchParameters, SimConfig, TrajectorySample};
