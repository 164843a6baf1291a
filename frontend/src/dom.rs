use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::error::BehaviorError;

/// The handful of mutations behaviors make on an element: class markers,
/// inline style properties and text.
///
/// Behaviors are written against this trait so the same transition code runs
/// on live elements and on the in-memory fakes used in tests.
pub trait ElementHandle {
    fn has_marker(&self, marker: &str) -> bool;
    fn set_marker(&self, marker: &str, on: bool);
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);

    /// Flips `marker` and returns the new state.
    fn toggle_marker(&self, marker: &str) -> bool {
        let on = !self.has_marker(marker);
        self.set_marker(marker, on);
        on
    }
}

impl ElementHandle for Element {
    fn has_marker(&self, marker: &str) -> bool {
        self.class_list().contains(marker)
    }

    fn set_marker(&self, marker: &str, on: bool) {
        let list = self.class_list();
        let _ = if on { list.add_1(marker) } else { list.remove_1(marker) };
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// `querySelector(All)` returning owned elements. Invalid selectors match
/// nothing.
pub trait Query {
    fn query_all(&self, selector: &str) -> Vec<Element>;
    fn query_one(&self, selector: &str) -> Option<Element>;
}

impl Query for Document {
    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn query_one(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }
}

impl Query for Element {
    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn query_one(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| BehaviorError::listener(event, e))?;
    callback.forget();
    Ok(())
}

/// Same as [`listen`] with explicit listener options (passive, once).
pub fn listen_with<F>(
    target: &EventTarget,
    event: &'static str,
    options: &AddEventListenerOptions,
    handler: F,
) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            options,
        )
        .map_err(|e| BehaviorError::listener(event, e))?;
    callback.forget();
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::ElementHandle;

    #[test]
    fn toggle_marker_reports_new_state() {
        let el = FakeElement::default();
        assert!(el.toggle_marker("open"));
        assert!(el.has_marker("open"));
        assert!(!el.toggle_marker("open"));
        assert!(!el.has_marker("open"));
    }

    #[test]
    fn set_marker_is_idempotent() {
        let el = FakeElement::with_markers(&["visible"]);
        el.set_marker("visible", true);
        assert!(el.has_marker("visible"));
        el.set_marker("visible", false);
        el.set_marker("visible", false);
        assert!(!el.has_marker("visible"));
    }
}
