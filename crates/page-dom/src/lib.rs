//! Page DOM Helpers
//!
//! Optional-safe lookups and event wiring for enhancing a server-rendered page.
//! Every lookup returns `Option` (or an empty list): a missing element means the
//! feature is not present on this page, never an error.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// `document.readyState` value before the initial HTML has been parsed
const READY_STATE_LOADING: &str = "loading";

/// Whether a page in `ready_state` still has to wait for `DOMContentLoaded`
pub fn is_still_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// Current document, if running in a browser window
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Look up an element by id. Empty ids never match.
pub fn element_by_id(id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document()?.get_element_by_id(id)
}

/// Snapshot of all elements matching `selector`, in document order.
///
/// Empty or invalid selectors yield an empty list.
pub fn query_all(selector: &str) -> Vec<Element> {
    if selector.is_empty() {
        return Vec::new();
    }
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attribute value, or an empty string when the attribute is absent
pub fn attr_or_empty(el: &Element, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

/// Current value of a form control (input, select or textarea).
/// Any other element has no value.
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Add (`on == true`) or remove a class
pub fn set_class(el: &Element, class: &str, on: bool) {
    if class.is_empty() {
        return;
    }
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Whether the element currently carries `class`
pub fn has_class(el: &Element, class: &str) -> bool {
    !class.is_empty() && el.class_list().contains(class)
}

/// Bind `handler` to `event` on `target` for the lifetime of the page
pub fn on_event<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Run `init` once the page structure is available.
///
/// Waits for `DOMContentLoaded` while the document is still loading,
/// otherwise runs immediately. Without a document nothing runs.
pub fn on_ready<F>(init: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if is_still_loading(&doc.ready_state()) {
        let cb = Closure::once_into_js(init);
        let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    } else {
        init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_still_loading() {
        assert!(is_still_loading("loading"));
        assert!(!is_still_loading("interactive"));
        assert!(!is_still_loading("complete"));
    }
}
