//! Reading slider options handed over from JavaScript

use wasm_bindgen::JsValue;

use vitrine_model::{SliderConfig, SliderOptions, SliderResult};

use crate::dom::js_error;

/// Resolve the options argument of the `ImageSlider` constructor.
///
/// Accepts `undefined`/`null` (all defaults), a plain options object, or a
/// JSON string with the same keys.
pub fn parse(options: &JsValue) -> SliderResult<SliderConfig> {
    if options.is_undefined() || options.is_null() {
        return SliderConfig::from_options(SliderOptions::default());
    }
    if let Some(json) = options.as_string() {
        return SliderConfig::from_json(&json);
    }
    let json = js_sys::JSON::stringify(options)
        .map_err(|err| js_error("JSON.stringify(options)", &err))?;
    SliderConfig::from_json(&String::from(json))
}
