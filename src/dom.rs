//! Thin `web-sys` helpers used by the behavior shells.
//!
//! Lookups return `Option` because a missing element is an ordinary outcome for
//! this crate. Mutations that can throw are logged at `warn` and otherwise
//! ignored.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::UiError;

/// The global `window`.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// The document attached to the global `window`.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] or [`UiError::NoDocument`].
pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// First element in `document` matching `selector`, as an `HtmlElement`.
#[must_use]
pub fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            None
        }
    }
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn find_within(root: &Element, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            None
        }
    }
}

/// Every element in `document` matching `selector`.
#[must_use]
pub fn find_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every descendant of `root` matching `selector`.
#[must_use]
pub fn find_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element with the given `id`, as an `HtmlElement`.
#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Nearest ancestor-or-self of an event target matching `selector`.
#[must_use]
pub fn closest(target: &EventTarget, selector: &str) -> Option<Element> {
    let element = target.dyn_ref::<Element>()?;
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("closest {selector:?} failed: {err:?}");
            None
        }
    }
}

/// Whether an event target is an element carrying `class`.
#[must_use]
pub fn has_class(target: &EventTarget, class: &str) -> bool {
    target
        .dyn_ref::<Element>()
        .is_some_and(|el| el.class_list().contains(class))
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    report(&format!("class {class:?}"), result);
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    report(
        &format!("style {property:?}"),
        element.style().set_property(property, value),
    );
}

/// Set one attribute.
pub fn set_attribute(element: &Element, name: &str, value: &str) {
    report(&format!("attribute {name:?}"), element.set_attribute(name, value));
}

/// Move keyboard focus to `element`.
pub fn focus(element: &HtmlElement) {
    report("focus", element.focus());
}

/// Log a failed DOM mutation.
pub fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("setting {what} failed: {err:?}");
    }
}
