//! Touch tracking for swipe navigation

use vitrine_model::SwipeDirection;

/// Remembers where the current touch began until it ends.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Record the screen X coordinate at touch start.
    pub fn begin(&mut self, screen_x: f64) {
        self.start_x = Some(screen_x);
    }

    /// Finish the touch at `screen_x` and classify it.
    ///
    /// A touch end with no recorded start yields `None`.
    pub fn finish(&mut self, screen_x: f64) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        SwipeDirection::classify(start_x, screen_x, self.threshold_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_consumed_by_finish() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(300.0);
        assert_eq!(tracker.finish(240.0), Some(SwipeDirection::Left));
        // Second end without a new start is ignored
        assert_eq!(tracker.finish(100.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.finish(10.0), None);
    }
}
