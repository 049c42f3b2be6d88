//! Slider configuration
//!
//! [`SliderOptions`] is the loose option bag accepted from callers (a JS
//! object or JSON document with camelCase keys). [`SliderConfig`] is the
//! resolved, validated form the controller is built from and never changes
//! after construction.

use std::time::Duration;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, SliderError};
use crate::swipe::DEFAULT_SWIPE_THRESHOLD_PX;

pub const DEFAULT_SLIDER_SELECTOR: &str = ".slider";
pub const DEFAULT_NAV_SELECTOR: &str = ".slider-nav a";
pub const DEFAULT_AUTO_PLAY_DELAY_MS: u64 = 3000;
/// Longest delay a browser interval honours; larger values fire immediately.
pub const MAX_AUTO_PLAY_DELAY_MS: u64 = i32::MAX as u64;

/// Raw, caller-supplied options. Every key is optional.
///
/// Values are read loosely, the way a page script hands them over: any
/// `autoPlay` other than `false` leaves autoplay on, and numeric keys accept
/// numbers or numeric strings, with `false` and `""` meaning "unset".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderOptions {
    pub slider_selector: Option<String>,
    pub nav_selector: Option<String>,
    #[serde(deserialize_with = "loose_flag")]
    pub auto_play: Option<bool>,
    /// Milliseconds between autoplay ticks. `0` selects the default.
    #[serde(deserialize_with = "loose_number")]
    pub auto_play_delay: Option<f64>,
    #[serde(deserialize_with = "loose_number")]
    pub swipe_threshold: Option<f64>,
}

fn loose_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(flag) => Some(flag),
        _ => Some(true),
    })
}

fn loose_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got {text:?}"))),
        other => Err(D::Error::custom(format!("expected a number, got {other}"))),
    }
}

/// Resolved slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Selector locating the scrollable container that holds the slides.
    pub container_selector: String,
    /// Selector locating navigation links, one per slide, in document order.
    pub nav_selector: String,
    /// Whether autoplay is enabled at all. Hover-resume never starts
    /// autoplay when this is false.
    pub auto_play: bool,
    pub auto_play_delay: Duration,
    pub swipe_threshold_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_SLIDER_SELECTOR.to_string(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_string(),
            auto_play: true,
            auto_play_delay: Duration::from_millis(DEFAULT_AUTO_PLAY_DELAY_MS),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl SliderConfig {
    /// Resolve an option bag against the defaults and validate the result.
    ///
    /// Empty selectors and a zero (or NaN) delay fall back to their defaults,
    /// mirroring how the options object has always been read. Autoplay stays
    /// on unless `autoPlay` is explicitly `false`.
    pub fn from_options(options: SliderOptions) -> Result<Self> {
        let defaults = Self::default();

        let container_selector = non_empty(options.slider_selector)
            .unwrap_or(defaults.container_selector);
        let nav_selector =
            non_empty(options.nav_selector).unwrap_or(defaults.nav_selector);

        let auto_play_delay = match options.auto_play_delay {
            None => defaults.auto_play_delay,
            Some(ms) if ms == 0.0 || ms.is_nan() => defaults.auto_play_delay,
            Some(ms) if ms < 0.0 || ms.is_infinite() => {
                return Err(SliderError::InvalidConfig(format!(
                    "autoPlayDelay must be a positive number of milliseconds, got {ms}"
                )));
            }
            Some(ms) => Duration::from_millis(ms.round().max(1.0) as u64),
        };

        let config = Self {
            container_selector,
            nav_selector,
            auto_play: options.auto_play != Some(false),
            auto_play_delay,
            swipe_threshold_px: options
                .swipe_threshold
                .unwrap_or(defaults.swipe_threshold_px),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and resolve options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SliderOptions = serde_json::from_str(json)?;
        Self::from_options(options)
    }

    /// Check the invariants the controller relies on.
    pub fn validate(&self) -> Result<()> {
        if self.container_selector.trim().is_empty() {
            return Err(SliderError::InvalidConfig(
                "container selector is empty".into(),
            ));
        }
        if self.nav_selector.trim().is_empty() {
            return Err(SliderError::InvalidConfig(
                "navigation selector is empty".into(),
            ));
        }
        if self.auto_play_delay.is_zero() {
            return Err(SliderError::InvalidConfig(
                "autoplay delay must be greater than zero".into(),
            ));
        }
        if self.auto_play_delay > Duration::from_millis(MAX_AUTO_PLAY_DELAY_MS) {
            return Err(SliderError::InvalidConfig(format!(
                "autoplay delay must be at most {MAX_AUTO_PLAY_DELAY_MS}ms, got {}ms",
                self.auto_play_delay.as_millis()
            )));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0
        {
            return Err(SliderError::InvalidConfig(format!(
                "swipe threshold must be a non-negative number of pixels, got {}",
                self.swipe_threshold_px
            )));
        }
        Ok(())
    }

    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    pub fn with_nav_selector(mut self, selector: impl Into<String>) -> Self {
        self.nav_selector = selector.into();
        self
    }

    pub fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play = enabled;
        self
    }

    pub fn with_auto_play_delay(mut self, delay: Duration) -> Self {
        self.auto_play_delay = delay;
        self
    }

    pub fn with_swipe_threshold(mut self, pixels: f64) -> Self {
        self.swipe_threshold_px = pixels;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
