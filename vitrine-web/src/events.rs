//! DOM event wiring
//!
//! Every listener translates its DOM event into a [`SliderEvent`] and hands
//! it to the controller through a weak reference, so listeners never keep a
//! disposed slider alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, TouchEvent};

use vitrine_core::SliderEvent;

use crate::WebSlider;

/// Attach click, touch and hover listeners. Dropping the returned
/// listeners detaches them.
pub fn bind(
    container: &Element,
    nav: &[Element],
    slider: &Rc<RefCell<WebSlider>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(nav.len() + 4);

    for (index, control) in nav.iter().enumerate() {
        let slider = Rc::downgrade(slider);
        listeners.push(EventListener::new_with_options(
            control,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                dispatch(&slider, SliderEvent::NavPressed(index));
            },
        ));
    }

    let weak = Rc::downgrade(slider);
    listeners.push(EventListener::new(container, "touchstart", move |event| {
        if let Some(screen_x) = touch_screen_x(event) {
            dispatch(&weak, SliderEvent::TouchStarted { screen_x });
        }
    }));

    let weak = Rc::downgrade(slider);
    listeners.push(EventListener::new(container, "touchend", move |event| {
        if let Some(screen_x) = touch_screen_x(event) {
            dispatch(&weak, SliderEvent::TouchEnded { screen_x });
        }
    }));

    let weak = Rc::downgrade(slider);
    listeners.push(EventListener::new(container, "mouseenter", move |_| {
        dispatch(&weak, SliderEvent::PointerEntered);
    }));

    let weak = Rc::downgrade(slider);
    listeners.push(EventListener::new(container, "mouseleave", move |_| {
        dispatch(&weak, SliderEvent::PointerLeft);
    }));

    listeners
}

/// Deliver an event to the controller if it is still alive and not already
/// handling another event.
pub fn dispatch(slider: &Weak<RefCell<WebSlider>>, event: SliderEvent) {
    let Some(slider) = slider.upgrade() else {
        return;
    };
    let Ok(mut slider) = slider.try_borrow_mut() else {
        log::warn!("Slider busy, dropped {event:?}");
        return;
    };
    if let Err(err) = slider.update(event) {
        log::warn!("Slider rejected {event:?}: {err}");
    }
}

fn touch_screen_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
