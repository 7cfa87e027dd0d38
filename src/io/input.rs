use crate::dynamics::state::{LaunchParameters, DEFAULT_DRAG};
use crate::error::SimError;

/// Parse one user-entered number.
///
/// Accepts a comma as the decimal separator ("9,81"). Rejects anything that
/// is not a finite real number.
pub fn parse_scalar(field: &'static str, text: &str) -> Result<f64, SimError> {
    let trimmed = text.trim();
    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SimError::InvalidInput { field, value: trimmed.to_string() })
}

/// The raw text of the launch input fields, as a form or command line holds them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchText {
    pub speed: String,
    pub angle_degrees: String,
    pub time_step: String,
    pub mass: String,
    /// Empty means the default coefficient.
    pub drag: String,
}

impl LaunchText {
    pub fn parse(&self) -> Result<LaunchParameters, SimError> {
        let drag = if self.drag.trim().is_empty() {
            DEFAULT_DRAG
        } else {
            parse_scalar("drag coefficient", &self.drag)?
        };
        Ok(LaunchParameters::new(
            parse_scalar("speed", &self.speed)?,
            parse_scalar("angle", &self.angle_degrees)?,
            parse_scalar("time step", &self.time_step)?,
            parse_scalar("mass", &self.mass)?,
            drag,
        ))
    }
}
