//! WebAssembly bindings for the Vitrine image slider.
//!
//! ```js
//! import init, { ImageSlider, initLogging } from "vitrine_web";
//!
//! await init();
//! initLogging("info");
//! document.addEventListener("DOMContentLoaded", () => {
//!   const slider = new ImageSlider({ autoPlay: true, autoPlayDelay: 3000 });
//!   // later: slider.dispose();
//! });
//! ```
//!
//! Nothing is mounted implicitly; each `ImageSlider` is an independent
//! instance with its own timer and listeners.

pub mod dom;
pub mod events;
pub mod logger;
pub mod options;
pub mod timer;

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use gloo::events::EventListener;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

use vitrine_contracts::TimerId;
use vitrine_core::{SliderController, SliderError, SliderEvent};

use crate::dom::DomHost;
use crate::timer::IntervalScheduler;

/// Controller specialised to the live DOM.
pub type WebSlider = SliderController<DomHost, IntervalScheduler>;

fn to_js(err: SliderError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Install a console logger. `level` is one of `off`, `error`, `warn`,
/// `info`, `debug` or `trace`; defaults to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    let filter = level
        .as_deref()
        .and_then(|l| LevelFilter::from_str(l).ok())
        .unwrap_or(LevelFilter::Info);
    if logger::init(filter).is_err() {
        log::debug!("Console logger already installed; level set to {filter}");
    }
}

/// An image slider mounted on the current document.
#[wasm_bindgen]
pub struct ImageSlider {
    inner: Rc<RefCell<WebSlider>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ImageSlider {
    /// Locate the slider, bind its listeners and start autoplay if enabled.
    ///
    /// Throws if the container selector matches nothing or the options are
    /// invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ImageSlider, JsValue> {
        let config = options::parse(&options).map_err(to_js)?;
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| to_js(SliderError::Host("no document available".into())))?;

        let host = DomHost::locate(&document, &config).map_err(to_js)?;
        let container = host.container().clone();
        let nav = host.nav_controls().to_vec();

        let scheduler = IntervalScheduler::new();
        let sink = scheduler.sink();

        let controller = SliderController::new(config, host, scheduler).map_err(to_js)?;
        let inner = Rc::new(RefCell::new(controller));

        let weak = Rc::downgrade(&inner);
        if sink
            .set(Box::new(move |timer: TimerId| {
                events::dispatch(&weak, SliderEvent::Tick(timer));
            }))
            .is_err()
        {
            log::warn!("Tick sink was already connected");
        }

        let listeners = events::bind(&container, &nav, &inner);
        log::info!(
            "Image slider mounted on `{}` ({} slides)",
            inner.borrow().config().container_selector,
            inner.borrow().slide_count()
        );

        Ok(ImageSlider { inner, listeners })
    }

    pub fn next(&self) -> Result<(), JsValue> {
        self.with_slider(|slider| {
            slider.next();
            Ok(())
        })
    }

    pub fn previous(&self) -> Result<(), JsValue> {
        self.with_slider(|slider| {
            slider.previous();
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: u32) -> Result<(), JsValue> {
        self.with_slider(|slider| slider.go_to_slide(index as usize))
    }

    #[wasm_bindgen(js_name = startAutoPlay)]
    pub fn start_auto_play(&self) -> Result<(), JsValue> {
        self.with_slider(|slider| {
            slider.start_auto_play();
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = pauseAutoPlay)]
    pub fn pause_auto_play(&self) -> Result<(), JsValue> {
        self.with_slider(|slider| {
            slider.pause_auto_play();
            Ok(())
        })
    }

    #[wasm_bindgen(js_name = resumeAutoPlay)]
    pub fn resume_auto_play(&self) -> Result<(), JsValue> {
        self.with_slider(|slider| {
            slider.resume_auto_play();
            Ok(())
        })
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.inner.borrow().current_index() as u32
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.inner.borrow().slide_count() as u32
    }

    #[wasm_bindgen(getter, js_name = isAutoPlaying)]
    pub fn is_auto_playing(&self) -> bool {
        self.inner.borrow().is_auto_playing()
    }

    /// Stop autoplay and detach every listener. The slider stays usable
    /// through its methods but no longer reacts to the page.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        match self.inner.try_borrow_mut() {
            Ok(mut slider) => slider.dispose(),
            Err(_) => log::warn!("Slider busy during dispose; timer left to drop"),
        }
    }
}

impl ImageSlider {
    fn with_slider<F>(&self, f: F) -> Result<(), JsValue>
    where
        F: FnOnce(&mut WebSlider) -> Result<(), SliderError>,
    {
        let mut slider = self
            .inner
            .try_borrow_mut()
            .map_err(|_| to_js(SliderError::Host("slider is busy".into())))?;
        f(&mut slider).map_err(to_js)
    }
}

impl Drop for ImageSlider {
    fn drop(&mut self) {
        self.dispose();
    }
}
