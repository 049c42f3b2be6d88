//! Virtual-time scheduler for exercising autoplay without real timers

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Timer>,
    scheduled_total: usize,
}

impl ClockInner {
    /// Pop the earliest timer due at or before `until`, rescheduling it.
    fn fire_next(&mut self, until: Duration) -> Option<TimerId> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, t)| t.next_due <= until)
            .min_by_key(|(id, t)| (t.next_due, **id))
            .map(|(id, t)| (*id, t.next_due))?;

        self.now = due;
        if let Some(timer) = self.timers.get_mut(&id) {
            timer.next_due += timer.period;
        }
        Some(id)
    }
}

/// Cloneable handle to a shared virtual clock.
///
/// Hand one clone to the controller and keep another in the test to drive
/// time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ClockInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers currently registered.
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Number of timers ever registered, cancelled ones included.
    pub fn scheduled_total(&self) -> usize {
        self.inner.borrow().scheduled_total
    }

    pub fn is_active(&self, timer: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(&timer)
    }

    /// Advance virtual time by `elapsed`, invoking `on_fire` for each timer
    /// firing in chronological order.
    ///
    /// The clock is not borrowed while `on_fire` runs, so the callback may
    /// register or cancel timers; a timer cancelled mid-advance stops firing
    /// immediately.
    pub fn advance_with<F>(&self, elapsed: Duration, mut on_fire: F)
    where
        F: FnMut(TimerId),
    {
        let until = self.inner.borrow().now + elapsed;
        loop {
            let fired = self.inner.borrow_mut().fire_next(until);
            match fired {
                Some(id) => {
                    log::trace!("manual clock fired {id}");
                    on_fire(id);
                }
                None => break,
            }
        }
        self.inner.borrow_mut().now = until;
    }

    /// Advance virtual time and return every firing in order.
    pub fn advance(&self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        self.advance_with(elapsed, |id| fired.push(id));
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        // A zero period would fire forever within a single advance
        let period = period.max(Duration::from_millis(1));
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        inner.scheduled_total += 1;
        let next_due = inner.now + period;
        inner.timers.insert(id, Timer { period, next_due });
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.inner.borrow_mut().timers.remove(&timer);
    }
}
