//! Run configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::dynamics::state::{LaunchParameters, SimConfig, DEFAULT_DRAG};

/// Launch section of a run file. Every key is optional.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    pub speed: f64,
    pub angle_degrees: f64,
    pub time_step: f64,
    pub mass: f64,
    pub drag_coefficient: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            speed: 20.0,
            angle_degrees: 45.0,
            time_step: 0.01,
            mass: 1.0,
            drag_coefficient: DEFAULT_DRAG,
        }
    }
}

impl LaunchConfig {
    pub fn to_parameters(&self) -> LaunchParameters {
        LaunchParameters::new(
            self.speed,
            self.angle_degrees,
            self.time_step,
            self.mass,
            self.drag_coefficient,
        )
    }
}

/// Pacing of the animated front-ends.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Wall-clock interval between two stepper calls, ms.
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { tick_ms: 30 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub launch: LaunchConfig,
    pub sim: SimConfig,
    pub animation: AnimationConfig,
}

/// Errors that can occur while loading a run file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a run configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<RunConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.launch.drag_coefficient, DEFAULT_DRAG);
        assert_eq!(cfg.animation.tick_ms, 30);
        assert_eq!(cfg.sim.max_steps, 1_000_000);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = parse_config(
            r#"
            [launch]
            speed = 35.5
            drag_coefficient = 0.0

            [sim]
            max_steps = 5000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.launch.speed, 35.5);
        assert_eq!(cfg.launch.angle_degrees, 45.0);
        assert_eq!(cfg.launch.drag_coefficient, 0.0);
        assert_eq!(cfg.sim.max_steps, 5000);
        assert_eq!(cfg.sim.min_mass, SimConfig::default().min_mass);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("[launch]\nvelocity = 10.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn launch_config_builds_parameters() {
        let p = LaunchConfig::default().to_parameters();
        assert_eq!(p.speed(), 20.0);
        assert_eq!(p.mass(), 1.0);
    }
}
