//! DOM-backed slide host

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollToOptions};

use vitrine_contracts::{ScrollBehavior, SlideHost};
use vitrine_model::{SliderConfig, SliderError, SliderResult};

/// Class toggled on the navigation link of the visible slide.
pub const ACTIVE_CLASS: &str = "active";

/// Slides are every `img` inside the container, in document order.
const SLIDE_SELECTOR: &str = "img";

/// Elements of one slider, resolved once when the slider is mounted.
#[derive(Debug, Clone)]
pub struct DomHost {
    container: Element,
    slides: Vec<HtmlElement>,
    nav: Vec<Element>,
}

impl DomHost {
    /// Resolve the container, its slides and the navigation links.
    ///
    /// A selector that matches nothing is a construction error rather than a
    /// failure on first use.
    pub fn locate(document: &Document, config: &SliderConfig) -> SliderResult<Self> {
        let container = document
            .query_selector(&config.container_selector)
            .map_err(|err| js_error("querySelector", &err))?
            .ok_or_else(|| {
                SliderError::ContainerNotFound(config.container_selector.clone())
            })?;

        let slides = container
            .query_selector_all(SLIDE_SELECTOR)
            .map(|list| collect::<HtmlElement>(&list))
            .map_err(|err| js_error("querySelectorAll(img)", &err))?;

        let nav = document
            .query_selector_all(&config.nav_selector)
            .map(|list| collect::<Element>(&list))
            .map_err(|err| js_error("querySelectorAll(nav)", &err))?;

        Ok(Self {
            container,
            slides,
            nav,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn nav_controls(&self) -> &[Element] {
        &self.nav
    }
}

impl SlideHost for DomHost {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide_offset(&self, index: usize) -> f64 {
        f64::from(self.slides[index].offset_left())
    }

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.container.scroll_to_with_scroll_to_options(&options);
    }

    fn nav_count(&self) -> usize {
        self.nav.len()
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        let Some(control) = self.nav.get(index) else {
            return;
        };
        let classes = control.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(err) = result {
            log::warn!("Failed to toggle nav control {index}: {}", describe(&err));
        }
    }
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn js_error(context: &str, err: &JsValue) -> SliderError {
    SliderError::Host(format!("{context}: {}", describe(err)))
}

pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
