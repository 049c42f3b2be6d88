//! `setInterval`-backed scheduler

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Interval;
use vitrine_contracts::{Scheduler, TimerId};
use vitrine_model::MAX_AUTO_PLAY_DELAY_MS;

/// Where interval firings are delivered. Filled in once the controller that
/// owns the scheduler exists; firings before that are dropped.
pub type TickSink = Rc<OnceCell<Box<dyn Fn(TimerId)>>>;

pub struct IntervalScheduler {
    next_id: u64,
    intervals: HashMap<TimerId, Interval>,
    sink: TickSink,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            intervals: HashMap::new(),
            sink: Rc::new(OnceCell::new()),
        }
    }

    pub fn sink(&self) -> TickSink {
        Rc::clone(&self.sink)
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("next_id", &self.next_id)
            .field("live", &self.intervals.keys().collect::<Vec<_>>())
            .field("sink_ready", &self.sink.get().is_some())
            .finish()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        // setInterval treats anything past i32::MAX as zero
        let millis = period.as_millis().min(u128::from(MAX_AUTO_PLAY_DELAY_MS)) as u32;
        let sink = Rc::clone(&self.sink);
        let interval = Interval::new(millis, move || match sink.get() {
            Some(deliver) => deliver(id),
            None => log::trace!("{id} fired before the slider was mounted"),
        });
        self.intervals.insert(id, interval);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        // Dropping the Interval clears it
        self.intervals.remove(&timer);
    }
}
