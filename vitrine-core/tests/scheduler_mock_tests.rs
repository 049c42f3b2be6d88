use std::time::Duration;

use mockall::mock;
use mockall::predicate::eq;
use vitrine_contracts::testing::RecordingHost;
use vitrine_contracts::{Scheduler, TimerId};
use vitrine_core::{SliderConfig, SliderController, SliderEvent};

mock! {
    pub Timers {}

    impl Scheduler for Timers {
        fn schedule_repeating(&mut self, period: Duration) -> TimerId;
        fn cancel(&mut self, timer: TimerId);
    }
}

fn host() -> RecordingHost {
    RecordingHost::uniform(3, 200.0)
}

#[test]
fn test_construction_registers_configured_period() {
    let mut timers = MockTimers::new();
    timers
        .expect_schedule_repeating()
        .with(eq(Duration::from_millis(4500)))
        .times(1)
        .return_const(TimerId(7));
    timers.expect_cancel().with(eq(TimerId(7))).times(1).return_const(());

    let slider = SliderController::new(
        SliderConfig::default().with_auto_play_delay(Duration::from_millis(4500)),
        host(),
        timers,
    )
    .unwrap();
    // Drop disposes and cancels exactly once
    drop(slider);
}

#[test]
fn test_repeated_start_schedules_once() {
    let mut timers = MockTimers::new();
    timers
        .expect_schedule_repeating()
        .times(1)
        .return_const(TimerId(1));
    timers.expect_cancel().times(1).return_const(());

    let mut slider = SliderController::new(SliderConfig::default(), host(), timers).unwrap();
    slider.start_auto_play();
    slider.start_auto_play();
    slider.update(SliderEvent::PointerLeft).unwrap();
}

#[test]
fn test_disabled_autoplay_never_touches_scheduler() {
    let mut timers = MockTimers::new();
    timers.expect_schedule_repeating().never();
    timers.expect_cancel().never();

    let mut slider = SliderController::new(
        SliderConfig::default().with_auto_play(false),
        host(),
        timers,
    )
    .unwrap();
    slider.update(SliderEvent::PointerEntered).unwrap();
    slider.update(SliderEvent::PointerLeft).unwrap();
    slider.pause_auto_play();
    slider.resume_auto_play();
    slider.dispose();
}

#[test]
fn test_hover_cycle_cancels_then_reschedules() {
    let mut timers = MockTimers::new();
    let mut issued = 0;
    timers.expect_schedule_repeating().times(2).returning(move |_| {
        issued += 1;
        TimerId(issued)
    });
    timers.expect_cancel().with(eq(TimerId(1))).times(1).return_const(());
    timers.expect_cancel().with(eq(TimerId(2))).times(1).return_const(());

    let mut slider = SliderController::new(SliderConfig::default(), host(), timers).unwrap();
    assert!(slider.is_auto_playing());

    slider.update(SliderEvent::PointerEntered).unwrap();
    assert!(!slider.is_auto_playing());

    slider.update(SliderEvent::PointerLeft).unwrap();
    assert!(slider.is_auto_playing());

    slider.dispose();
}
