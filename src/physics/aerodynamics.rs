use nalgebra::Vector2;

/// Linear drag deceleration, `-(k / m) * v`.
///
/// Undefined for zero mass; callers reject that before integrating.
pub fn drag_accel(vel: &Vector2<f64>, mass: f64, drag: f64) -> Vector2<f64> {
    -vel * (drag / mass)
}
