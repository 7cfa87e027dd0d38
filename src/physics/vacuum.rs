use serde::Serialize;

use super::gravity::G;
use crate::dynamics::state::LaunchParameters;

/// Closed-form drag-free flight from ground level, used as a reference
/// against the integrated trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VacuumEstimate {
    pub range: f64,
    pub max_height: f64,
    pub flight_time: f64,
}

impl VacuumEstimate {
    /// Downward launches leave the ground immediately, so everything is zero.
    pub fn for_launch(params: &LaunchParameters) -> Self {
        let theta = params.angle_radians();
        let v = params.speed();
        let vy = v * theta.sin();
        if vy <= 0.0 {
            return Self { range: 0.0, max_height: 0.0, flight_time: 0.0 };
        }
        let flight_time = 2.0 * vy / G;
        Self {
            range: v * theta.cos() * flight_time,
            max_height: vy * vy / (2.0 * G),
            flight_time,
        }
    }
}
