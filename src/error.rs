use thiserror::Error;

/// Failures surfaced by the flight engine and its input layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Raw text could not be read as a finite real number.
    #[error("invalid {field}: '{value}' is not a number")]
    InvalidInput { field: &'static str, value: String },

    /// Mass is zero (or close enough that the drag term blows up).
    #[error("degenerate parameters: mass {mass} kg is too close to zero")]
    DegenerateParameters { mass: f64 },

    /// The body was still airborne when the iteration cap was hit.
    #[error("trajectory did not return to the ground within {steps} steps")]
    NonTerminating { steps: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SimError::InvalidInput { field: "speed", value: "abc".into() };
        assert_eq!(err.to_string(), "invalid speed: 'abc' is not a number");

        let err = SimError::NonTerminating { steps: 1_000 };
        assert!(err.to_string().contains("1000 steps"));
    }
}
