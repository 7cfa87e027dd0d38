use crate::dynamics::state::{KinematicState, LaunchParameters};
use crate::physics;

// ---------------------------------------------------------------------------
// Semi-explicit Euler step
// ---------------------------------------------------------------------------

/// Advance the state by one `dt`.
///
/// Velocity is updated first and the *updated* velocity moves the position:
///   v += a(v) * dt;  p += v * dt;  t += dt
pub fn euler_step(state: &KinematicState, params: &LaunchParameters) -> KinematicState {
    let dt = params.time_step();
    let accel = physics::acceleration(&state.vel, params.mass(), params.drag());
    let vel = state.vel + accel * dt;

    KinematicState {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
    }
}
