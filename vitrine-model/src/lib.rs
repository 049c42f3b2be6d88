//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod index;
pub mod swipe;

// Intentionally curated re-exports for downstream consumers.
pub use config::{
    DEFAULT_AUTO_PLAY_DELAY_MS, DEFAULT_NAV_SELECTOR, DEFAULT_SLIDER_SELECTOR,
    MAX_AUTO_PLAY_DELAY_MS, SliderConfig, SliderOptions,
};
pub use error::{Result as SliderResult, SliderError};
pub use index::{wrap_next, wrap_previous};
pub use swipe::{DEFAULT_SWIPE_THRESHOLD_PX, SwipeDirection};
