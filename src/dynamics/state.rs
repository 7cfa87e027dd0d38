use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Drag coefficient used when none is supplied.
pub const DEFAULT_DRAG: f64 = 0.1;

// ---------------------------------------------------------------------------
// Launch parameters
// ---------------------------------------------------------------------------

/// The five scalars that fully determine one flight. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchParameters {
    speed: f64,         // m/s
    angle_degrees: f64, // deg above horizontal
    angle_radians: f64, // derived once in `new`
    time_step: f64,     // s, simulated time per step
    mass: f64,          // kg
    drag: f64,          // linear drag coefficient
}

impl LaunchParameters {
    pub fn new(speed: f64, angle_degrees: f64, time_step: f64, mass: f64, drag: f64) -> Self {
        Self {
            speed,
            angle_degrees,
            angle_radians: angle_degrees.to_radians(),
            time_step,
            mass,
            drag,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_radians
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Launch velocity decomposed into (vx, vy).
    pub fn initial_velocity(&self) -> Vector2<f64> {
        Vector2::new(
            self.speed * self.angle_radians.cos(),
            self.speed * self.angle_radians.sin(),
        )
    }
}

// ---------------------------------------------------------------------------
// Kinematic state
// ---------------------------------------------------------------------------

/// Position, velocity and elapsed time of the body during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicState {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m   [downrange, up]
    pub vel: Vector2<f64>, // m/s
}

impl KinematicState {
    /// State at release: origin, decomposed launch velocity, t = 0.
    pub fn launch(params: &LaunchParameters) -> Self {
        Self {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: params.initial_velocity(),
        }
    }

    pub fn is_below_ground(&self) -> bool {
        self.pos.y < 0.0
    }

    pub fn sample(&self) -> TrajectorySample {
        TrajectorySample { time: self.time, x: self.pos.x, y: self.pos.y }
    }
}

/// One rendered point of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Simulation limits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub max_steps: u64, // iteration cap before NonTerminating
    pub min_mass: f64,  // |mass| below this is degenerate, kg
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
            min_mass: 1e-9,
        }
    }
}
