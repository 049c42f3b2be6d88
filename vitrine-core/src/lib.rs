//! Environment-agnostic image slider controller.
//!
//! The controller owns the current slide index and the autoplay timer, and
//! talks to the outside world only through the [`SlideHost`] and
//! [`Scheduler`] traits. Browser bindings, and tests, supply those.
//!
//! ```
//! use std::time::Duration;
//! use vitrine_contracts::testing::{ManualScheduler, RecordingHost};
//! use vitrine_core::{SliderConfig, SliderController, SliderEvent};
//!
//! let clock = ManualScheduler::new();
//! let mut slider = SliderController::new(
//!     SliderConfig::default(),
//!     RecordingHost::uniform(4, 320.0),
//!     clock.clone(),
//! )
//! .unwrap();
//!
//! clock.advance_with(Duration::from_millis(6000), |timer| {
//!     slider.update(SliderEvent::Tick(timer)).unwrap();
//! });
//! assert_eq!(slider.current_index(), 2);
//! ```
//!
//! [`SlideHost`]: vitrine_contracts::SlideHost
//! [`Scheduler`]: vitrine_contracts::Scheduler

pub mod autoplay;
pub mod controller;
pub mod gesture;
pub mod messages;

pub use autoplay::{AutoPlay, AutoPlayState};
pub use controller::SliderController;
pub use gesture::SwipeTracker;
pub use messages::SliderEvent;

pub use vitrine_model::{SliderConfig, SliderError, SliderOptions, SliderResult, SwipeDirection};
