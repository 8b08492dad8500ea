#![cfg(all(feature = "web", target_arch = "wasm32"))]

use elgen::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn creates_browser_elements() {
    let document = elgen::web::document().unwrap();
    let el = tags::span(document)
        .with_props(props! { "className" => "big", "title" => "tip" })
        .build(text!("Score: {}", 42))
        .unwrap();

    assert_eq!(el.tag_name(), "SPAN");
    assert_eq!(el.class_name(), "big");
    assert_eq!(el.text_content().as_deref(), Some("Score: 42"));
    assert_eq!(
        js_sys::Reflect::get(&el, &JsValue::from_str("title")).unwrap(),
        JsValue::from_str("tip")
    );
    // never attached
    assert!(el.parent_node().is_none());
}

#[wasm_bindgen_test]
fn rejects_invalid_names() {
    let document = elgen::web::document().unwrap();
    let result = make_element_factory(document, "not a tag").build("x");
    assert!(matches!(result, Err(Error::InvalidElementType { .. })));
}
