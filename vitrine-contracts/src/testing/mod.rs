//! Deterministic stand-ins for the browser environment
//!
//! - [`RecordingHost`]: in-memory slides and navigation controls that record
//!   every scroll request and highlight change
//! - [`ManualScheduler`]: virtual clock; timers only fire when the test
//!   advances time

pub mod clock;
pub mod host;

pub use clock::ManualScheduler;
pub use host::{RecordingHost, ScrollRequest};
