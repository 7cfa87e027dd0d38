// ---------------------------------------------------------------------------
// Landing notification
// ---------------------------------------------------------------------------

/// Fixed text announced once when a run reaches the ground.
pub const LANDING_MESSAGE: &str = "The body has reached the ground.";

/// Receives the single landing notification of a run.
pub trait LandingObserver {
    fn on_landed(&mut self, message: &str);
}

impl<F> LandingObserver for F
where
    F: FnMut(&str),
{
    fn on_landed(&mut self, message: &str) {
        (self)(message)
    }
}

/// Ignores the notification.
pub struct Silent;

impl LandingObserver for Silent {
    fn on_landed(&mut self, _message: &str) {}
}
