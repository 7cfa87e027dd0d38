pub mod aerodynamics;
pub mod gravity;
pub mod vacuum;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Motion model: the one acceleration law shared by solver and stepper
// ---------------------------------------------------------------------------

/// Instantaneous acceleration of a point mass under gravity and linear drag.
///
///   ax = -(k/m) * vx
///   ay = -g - (k/m) * vy
///
/// Pure; a zero mass yields inf/NaN and must be rejected by the caller.
pub fn acceleration(vel: &Vector2<f64>, mass: f64, drag: f64) -> Vector2<f64> {
    gravity::gravity_accel() + aerodynamics::drag_accel(vel, mass, drag)
}
