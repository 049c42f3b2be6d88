//! Horizontal swipe classification

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Direction of a recognised swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left; advances to the next slide.
    Left,
    /// Finger travelled left-to-right; returns to the previous slide.
    Right,
}

impl SwipeDirection {
    /// Classify a touch from its start and end screen X coordinates.
    ///
    /// Travel of exactly `threshold` or less is treated as a tap or jitter and
    /// yields `None`.
    pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<Self> {
        let difference = start_x - end_x;
        if !difference.is_finite() || difference.abs() <= threshold {
            return None;
        }
        if difference > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}
