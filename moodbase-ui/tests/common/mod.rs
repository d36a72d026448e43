//! Shared fixtures for the browser tests.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Mount a view into a fresh `<section>` appended to the body
pub fn mount_fixture<F, N>(f: F) -> Element
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = leptos::document();
    let wrapper = document.create_element("section").unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();
    mount_to(wrapper.clone().unchecked_into(), f);
    wrapper
}

pub fn query(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .unchecked_into()
}

pub fn text(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}

/// Set the field and fire a bubbling event of the given type
pub fn type_into(input: &HtmlInputElement, value: &str, event_type: &str) {
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict(event_type, &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Change the current path without reloading, before a router mounts
pub fn visit(path: &str) {
    window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}
