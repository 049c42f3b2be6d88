//! Autoplay timer state machine
//!
//! ```text
//!            start / resume (enabled)
//!   Stopped ─────────────────────────▶ Running(timer)
//!      ▲                                   │
//!      └───────────── pause ───────────────┘
//!
//!   any state ── dispose ──▶ Disposed (terminal)
//! ```
//!
//! Every transition takes the scheduler explicitly so the machine itself
//! holds no environment handles and can be driven by a virtual clock.

use std::time::Duration;

use vitrine_contracts::{Scheduler, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoPlayState {
    #[default]
    Stopped,
    Running(TimerId),
    Disposed,
}

#[derive(Debug, Clone)]
pub struct AutoPlay {
    enabled: bool,
    period: Duration,
    state: AutoPlayState,
}

impl AutoPlay {
    /// `enabled` is the configured autoplay flag; it only gates
    /// [`resume`](Self::resume). Explicit [`start`](Self::start) always works.
    pub fn new(enabled: bool, period: Duration) -> Self {
        Self {
            enabled,
            period,
            state: AutoPlayState::Stopped,
        }
    }

    pub fn state(&self) -> AutoPlayState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoPlayState::Running(_))
    }

    /// True if `timer` is the live autoplay timer. Ticks from any other timer
    /// are stale and must not advance the slider.
    pub fn owns(&self, timer: TimerId) -> bool {
        self.state == AutoPlayState::Running(timer)
    }

    /// Stopped → Running. No-op while running so a second call never
    /// registers a duplicate timer. Returns whether a timer was registered.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.state {
            AutoPlayState::Stopped => {
                let timer = scheduler.schedule_repeating(self.period);
                log::debug!(
                    "Autoplay started ({timer}, every {}ms)",
                    self.period.as_millis()
                );
                self.state = AutoPlayState::Running(timer);
                true
            }
            AutoPlayState::Running(_) => false,
            AutoPlayState::Disposed => {
                log::trace!("Ignoring autoplay start after dispose");
                false
            }
        }
    }

    /// Running → Stopped, cancelling the timer. Safe while stopped.
    /// Returns whether a timer was cancelled.
    pub fn pause<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        if let AutoPlayState::Running(timer) = self.state {
            scheduler.cancel(timer);
            log::debug!("Autoplay paused ({timer} cancelled)");
            self.state = AutoPlayState::Stopped;
            true
        } else {
            false
        }
    }

    /// Start again only if autoplay was enabled in the configuration.
    pub fn resume<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        if self.enabled {
            self.start(scheduler)
        } else {
            false
        }
    }

    /// Cancel any live timer and refuse all future starts.
    pub fn dispose<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let AutoPlayState::Running(timer) = self.state {
            scheduler.cancel(timer);
            log::debug!("Autoplay disposed ({timer} cancelled)");
        }
        self.state = AutoPlayState::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_contracts::testing::ManualScheduler;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn start_twice_registers_one_timer() {
        let mut clock = ManualScheduler::new();
        let mut autoplay = AutoPlay::new(true, DELAY);

        assert!(autoplay.start(&mut clock));
        assert!(!autoplay.start(&mut clock));
        assert_eq!(clock.active_timers(), 1);
        assert_eq!(clock.scheduled_total(), 1);
    }

    #[test]
    fn pause_cancels_and_is_idempotent() {
        let mut clock = ManualScheduler::new();
        let mut autoplay = AutoPlay::new(true, DELAY);
        autoplay.start(&mut clock);

        assert!(autoplay.pause(&mut clock));
        assert!(!autoplay.pause(&mut clock));
        assert_eq!(autoplay.state(), AutoPlayState::Stopped);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn resume_respects_configured_flag() {
        let mut clock = ManualScheduler::new();

        let mut disabled = AutoPlay::new(false, DELAY);
        disabled.pause(&mut clock);
        assert!(!disabled.resume(&mut clock));
        assert_eq!(disabled.state(), AutoPlayState::Stopped);

        let mut enabled = AutoPlay::new(true, DELAY);
        enabled.start(&mut clock);
        enabled.pause(&mut clock);
        assert!(enabled.resume(&mut clock));
        assert!(enabled.is_running());
        assert_eq!(clock.active_timers(), 1);
    }

    #[test]
    fn stale_timer_is_not_owned() {
        let mut clock = ManualScheduler::new();
        let mut autoplay = AutoPlay::new(true, DELAY);
        autoplay.start(&mut clock);
        let AutoPlayState::Running(first) = autoplay.state() else {
            panic!("expected running state");
        };
        autoplay.pause(&mut clock);
        autoplay.resume(&mut clock);

        assert!(!autoplay.owns(first));
    }

    #[test]
    fn dispose_is_terminal() {
        let mut clock = ManualScheduler::new();
        let mut autoplay = AutoPlay::new(true, DELAY);
        autoplay.start(&mut clock);
        autoplay.dispose(&mut clock);

        assert_eq!(autoplay.state(), AutoPlayState::Disposed);
        assert_eq!(clock.active_timers(), 0);
        assert!(!autoplay.start(&mut clock));
        assert!(!autoplay.resume(&mut clock));
        assert_eq!(clock.active_timers(), 0);
    }
}
