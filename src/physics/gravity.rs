use nalgebra::Vector2;

/// Uniform surface gravity, m/s^2.
pub const G: f64 = 9.81;

/// Gravity acceleration in the launch plane (x downrange, y up).
pub fn gravity_accel() -> Vector2<f64> {
    Vector2::new(0.0, -G)
}
