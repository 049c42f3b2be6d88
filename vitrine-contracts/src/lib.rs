//! Trait surfaces that describe how the slider talks to its environment.

pub mod host;
pub mod scheduler;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use host::{ScrollBehavior, SlideHost};
pub use scheduler::{Scheduler, TimerId};
