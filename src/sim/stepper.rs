use tracing::{debug, info, warn};

use super::check_parameters;
use super::event::{LandingObserver, LANDING_MESSAGE};
use super::integrator::euler_step;
use super::solver::FlightReport;
use crate::dynamics::state::{KinematicState, LaunchParameters, SimConfig, TrajectorySample};
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Step result
// ---------------------------------------------------------------------------

/// Outcome of a single [`TrajectoryStepper::step`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepResult {
    /// Advanced one step; still at or above ground.
    InFlight(TrajectorySample),
    /// Advanced one step and dropped below ground. Reported exactly once per run.
    Landed(TrajectorySample),
    /// The run had already ended; nothing changed.
    Ended,
}

impl StepResult {
    pub fn sample(&self) -> Option<TrajectorySample> {
        match self {
            StepResult::InFlight(s) | StepResult::Landed(s) => Some(*s),
            StepResult::Ended => None,
        }
    }

    pub fn ended(&self) -> bool {
        !matches!(self, StepResult::InFlight(_))
    }
}

// ---------------------------------------------------------------------------
// Incremental integrator
// ---------------------------------------------------------------------------

/// Advances a flight one time step per call, for progressive display.
///
/// The caller owns the cadence: `step` never sleeps or reads a clock, and an
/// animation is cancelled by simply not calling it again.
#[derive(Debug, Clone)]
pub struct TrajectoryStepper {
    params: LaunchParameters,
    config: SimConfig,
    state: KinematicState,
    max_height: f64,
    steps: u64,
}

impl TrajectoryStepper {
    pub fn new(params: LaunchParameters, config: SimConfig) -> Result<Self, SimError> {
        check_parameters(&params, &config)?;
        debug!(?params, "stepper ready");
        Ok(Self {
            state: KinematicState::launch(&params),
            params,
            config,
            max_height: 0.0,
            steps: 0,
        })
    }

    /// Restart from the launch point. On error the current run is kept as is.
    pub fn reset(&mut self, params: LaunchParameters) -> Result<(), SimError> {
        check_parameters(&params, &self.config)?;
        debug!(?params, "stepper reset");
        self.params = params;
        self.state = KinematicState::launch(&params);
        self.max_height = 0.0;
        self.steps = 0;
        Ok(())
    }

    /// Advance exactly one `dt`, unless the body is already below ground.
    pub fn step(&mut self) -> Result<StepResult, SimError> {
        if self.is_ended() {
            return Ok(StepResult::Ended);
        }
        if self.steps >= self.config.max_steps {
            warn!(steps = self.steps, time = self.state.time, "iteration cap reached");
            return Err(SimError::NonTerminating { steps: self.steps });
        }

        self.max_height = self.max_height.max(self.state.pos.y);
        self.state = euler_step(&self.state, &self.params);
        self.steps += 1;

        let sample = self.state.sample();
        if self.state.is_below_ground() {
            info!(
                range = sample.x,
                max_height = self.max_height,
                flight_time = sample.time,
                steps = self.steps,
                "landed"
            );
            Ok(StepResult::Landed(sample))
        } else {
            Ok(StepResult::InFlight(sample))
        }
    }

    /// Like [`step`](Self::step), announcing the landing to `observer`.
    pub fn step_with(&mut self, observer: &mut dyn LandingObserver) -> Result<StepResult, SimError> {
        let result = self.step()?;
        if let StepResult::Landed(_) = result {
            observer.on_landed(LANDING_MESSAGE);
        }
        Ok(result)
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_below_ground()
    }

    /// Current position and elapsed simulated time.
    pub fn sample(&self) -> TrajectorySample {
        self.state.sample()
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.params
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Summary of the finished run; `None` while still airborne.
    pub fn report(&self) -> Option<FlightReport> {
        self.is_ended().then(|| FlightReport {
            range: self.state.pos.x,
            max_height: self.max_height,
            flight_time: self.state.time,
            steps: self.steps,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
