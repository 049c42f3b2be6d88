use std::fmt::{self, Display};
use std::time::Duration;

/// Opaque handle for a repeating timer registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Repeating-timer capability of the host environment.
///
/// A scheduler only registers and cancels timers. Whoever owns the
/// scheduler is responsible for routing each firing back to the controller
/// as a tick carrying the [`TimerId`] that fired.
pub trait Scheduler {
    /// Register a timer that fires every `period` until cancelled.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancel a timer. Cancelling an unknown or already-cancelled timer is a
    /// no-op.
    fn cancel(&mut self, timer: TimerId);
}
