//! A [`Document`] backed by the browser DOM.
//!
//! Properties are assigned with `Reflect.set`, so `className`, `hidden`, `value` and friends land on
//! the element object itself rather than as attributes.

use crate::{Document, Error, Result, Value};
use wasm_bindgen::JsValue;

/// The page's document, if there is a window to get it from.
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

impl Document for web_sys::Document {
    type Element = web_sys::Element;

    fn create_element(&self, tag: &str) -> Result<web_sys::Element> {
        let element = web_sys::Document::create_element(self, tag).map_err(|err| {
            tracing::warn!(tag, "document rejected element type");
            Error::InvalidElementType {
                tag: tag.to_string(),
                reason: describe(&err),
            }
        })?;
        tracing::trace!(tag, "created element");
        Ok(element)
    }

    fn set_property(&self, element: &mut web_sys::Element, name: &str, value: &Value) -> Result<()> {
        let invalid = |reason: String| Error::InvalidProperty {
            name: name.to_string(),
            reason,
        };

        match js_sys::Reflect::set(element, &JsValue::from_str(name), &to_js(value)) {
            Ok(true) => Ok(()),
            Ok(false) => Err(invalid("property is read-only".to_string())),
            Err(err) => Err(invalid(describe(&err))),
        }
    }

    fn set_text_content(&self, element: &mut web_sys::Element, text: &str) {
        element.set_text_content(Some(text));
    }
}

fn to_js(value: &Value) -> JsValue {
    match value {
        Value::Text(text) => JsValue::from_str(text),
        Value::Float(f) => JsValue::from_f64(*f),
        Value::Int(i) => JsValue::from_f64(*i as f64),
        Value::Uint(u) => JsValue::from_f64(*u as f64),
        Value::Bool(b) => JsValue::from_bool(*b),
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
