//! SliderController: the single owner of slider state
//!
//! Every index change, whether it comes from a navigation click, a swipe or
//! an autoplay tick, goes through [`SliderController::go_to_slide`] (or its
//! infallible twin used by wrap-around stepping), so scrolling and
//! navigation highlighting always stay in sync.

use vitrine_contracts::{ScrollBehavior, Scheduler, SlideHost};
use vitrine_model::{SliderConfig, SliderError, SliderResult, SwipeDirection};
use vitrine_model::{wrap_next, wrap_previous};

use crate::autoplay::{AutoPlay, AutoPlayState};
use crate::gesture::SwipeTracker;
use crate::messages::SliderEvent;

#[derive(Debug)]
pub struct SliderController<H: SlideHost, S: Scheduler> {
    config: SliderConfig,
    host: H,
    scheduler: S,
    /// Snapshot taken at construction; slides added later are not seen.
    slide_count: usize,
    current_index: usize,
    swipe: SwipeTracker,
    autoplay: AutoPlay,
}

impl<H: SlideHost, S: Scheduler> SliderController<H, S> {
    /// Bind a controller to `host` and start autoplay if configured.
    ///
    /// Fails only if `config` does not validate. An empty host is accepted;
    /// navigation on it is a no-op.
    pub fn new(config: SliderConfig, host: H, scheduler: S) -> SliderResult<Self> {
        config.validate()?;

        let slide_count = host.slide_count();
        let nav_count = host.nav_count();
        if nav_count != slide_count {
            log::warn!(
                "Slider `{}` has {} navigation controls for {} slides; extra controls will be rejected",
                config.container_selector,
                nav_count,
                slide_count
            );
        }

        let mut controller = Self {
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            autoplay: AutoPlay::new(config.auto_play, config.auto_play_delay),
            config,
            host,
            scheduler,
            slide_count,
            current_index: 0,
        };

        log::debug!(
            "Slider `{}` bound: {} slides, {} nav controls, autoplay={}",
            controller.config.container_selector,
            slide_count,
            nav_count,
            controller.config.auto_play
        );

        if controller.config.auto_play {
            controller.start_auto_play();
        }

        Ok(controller)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn autoplay_state(&self) -> AutoPlayState {
        self.autoplay.state()
    }

    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_disposed(&self) -> bool {
        self.autoplay.state() == AutoPlayState::Disposed
    }

    /// Jump to slide `index`, scroll it into view and re-highlight the
    /// navigation controls.
    ///
    /// Out-of-range indices are rejected without touching any state.
    pub fn go_to_slide(&mut self, index: usize) -> SliderResult<()> {
        if index >= self.slide_count {
            return Err(SliderError::IndexOutOfRange {
                index,
                len: self.slide_count,
            });
        }
        self.show(index);
        Ok(())
    }

    /// Advance one slide, wrapping from the last slide to the first.
    pub fn next(&mut self) {
        match wrap_next(self.current_index, self.slide_count) {
            Some(index) => self.show(index),
            None => log::trace!("next() on empty slider ignored"),
        }
    }

    /// Step back one slide, wrapping from the first slide to the last.
    pub fn previous(&mut self) {
        match wrap_previous(self.current_index, self.slide_count) {
            Some(index) => self.show(index),
            None => log::trace!("previous() on empty slider ignored"),
        }
    }

    /// Mark the control matching the current slide active and clear the rest.
    /// With no slides every control is cleared.
    pub fn update_navigation(&mut self) {
        let active = (self.slide_count > 0).then_some(self.current_index);
        for i in 0..self.host.nav_count() {
            self.host.set_nav_active(i, Some(i) == active);
        }
    }

    /// Interpret a completed touch and navigate if it was a real swipe.
    /// Returns the recognised direction.
    pub fn handle_swipe(&mut self, start_x: f64, end_x: f64) -> Option<SwipeDirection> {
        let direction =
            SwipeDirection::classify(start_x, end_x, self.swipe.threshold_px());
        match direction {
            Some(direction) => self.apply_swipe(direction),
            None => log::trace!(
                "Touch travel {:.1}px below swipe threshold",
                start_x - end_x
            ),
        }
        direction
    }

    pub fn start_auto_play(&mut self) {
        self.autoplay.start(&mut self.scheduler);
    }

    pub fn pause_auto_play(&mut self) {
        self.autoplay.pause(&mut self.scheduler);
    }

    /// Restart autoplay after a pause, but only if it is enabled in the
    /// configuration.
    pub fn resume_auto_play(&mut self) {
        self.autoplay.resume(&mut self.scheduler);
    }

    /// Cancel the autoplay timer for good. Navigation keeps working.
    pub fn dispose(&mut self) {
        if !self.is_disposed() {
            self.autoplay.dispose(&mut self.scheduler);
            log::debug!("Slider `{}` disposed", self.config.container_selector);
        }
    }

    /// Dispatch a single input event.
    pub fn update(&mut self, event: SliderEvent) -> SliderResult<()> {
        match event {
            SliderEvent::NavPressed(index) => return self.go_to_slide(index),
            SliderEvent::TouchStarted { screen_x } => self.swipe.begin(screen_x),
            SliderEvent::TouchEnded { screen_x } => {
                if let Some(direction) = self.swipe.finish(screen_x) {
                    self.apply_swipe(direction);
                }
            }
            SliderEvent::PointerEntered => self.pause_auto_play(),
            SliderEvent::PointerLeft => self.resume_auto_play(),
            SliderEvent::Tick(timer) => {
                if self.autoplay.owns(timer) {
                    self.next();
                } else {
                    log::trace!("Dropping stale tick from {timer}");
                }
            }
        }
        Ok(())
    }

    fn apply_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
    }

    /// Caller guarantees `index < slide_count`.
    fn show(&mut self, index: usize) {
        self.current_index = index;
        let left = self.host.slide_offset(index);
        self.host.scroll_to(left, ScrollBehavior::Smooth);
        self.update_navigation();
        log::debug!("Slide {}/{} at {left}px", index + 1, self.slide_count);
    }
}

impl<H: SlideHost, S: Scheduler> Drop for SliderController<H, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vitrine_contracts::testing::{ManualScheduler, RecordingHost};

    fn controller(
        slides: usize,
        config: SliderConfig,
    ) -> (SliderController<RecordingHost, ManualScheduler>, ManualScheduler) {
        let clock = ManualScheduler::new();
        let controller = SliderController::new(
            config,
            RecordingHost::uniform(slides, 100.0),
            clock.clone(),
        )
        .unwrap();
        (controller, clock)
    }

    #[test]
    fn go_to_slide_scrolls_and_highlights() {
        let (mut slider, _clock) = controller(5, SliderConfig::default());
        slider.go_to_slide(2).unwrap();

        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.host().active_nav(), vec![2]);
        let scroll = slider.host().last_scroll().unwrap();
        assert_eq!(scroll.left, 200.0);
        assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn out_of_range_is_rejected_without_side_effects() {
        let (mut slider, _clock) = controller(3, SliderConfig::default());
        slider.go_to_slide(1).unwrap();

        let err = slider.go_to_slide(3).unwrap_err();
        assert!(matches!(err, SliderError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.host().scrolls().len(), 1);
    }

    #[test]
    fn empty_slider_navigation_is_noop() {
        let (mut slider, _clock) = controller(0, SliderConfig::default());
        slider.next();
        slider.previous();

        assert_eq!(slider.current_index(), 0);
        assert!(slider.host().scrolls().is_empty());
    }

    #[test]
    fn empty_slider_highlights_no_control() {
        let mut slider = SliderController::new(
            SliderConfig::default(),
            RecordingHost::uniform(0, 100.0).with_nav_count(3),
            ManualScheduler::new(),
        )
        .unwrap();
        slider.update_navigation();

        assert!(slider.host().active_nav().is_empty());
    }

    #[test]
    fn construction_starts_autoplay_only_when_enabled() {
        let (on, on_clock) = controller(3, SliderConfig::default());
        assert!(on.is_auto_playing());
        assert_eq!(on_clock.active_timers(), 1);

        let (off, off_clock) =
            controller(3, SliderConfig::default().with_auto_play(false));
        assert!(!off.is_auto_playing());
        assert_eq!(off_clock.active_timers(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = SliderController::new(
            SliderConfig::default().with_auto_play_delay(Duration::ZERO),
            RecordingHost::uniform(3, 100.0),
            ManualScheduler::new(),
        );
        assert!(matches!(result, Err(SliderError::InvalidConfig(_))));
    }

    #[test]
    fn drop_cancels_the_timer() {
        let (slider, clock) = controller(3, SliderConfig::default());
        assert_eq!(clock.active_timers(), 1);
        drop(slider);
        assert_eq!(clock.active_timers(), 0);
    }
}
