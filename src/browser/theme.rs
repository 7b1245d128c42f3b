//! Theme attribute on `<html>` and the toggle button.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use super::describe;
use super::storage::BrowserStore;
use crate::config::PageConfig;
use crate::theme::{ThemeController, ThemeTarget};

/// The `<html>` element.
pub struct DocumentRoot(Element);

impl ThemeTarget for DocumentRoot {
    fn set_root_attribute(&self, attribute: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(attribute, value) {
            log::warn!("theme: cannot set {attribute}: {}", describe(&err));
        }
    }
}

/// Apply the stored theme and wire the toggle button, if the page has one.
pub fn install(window: &Window, document: &Document, config: &PageConfig) {
    let Some(root) = document.document_element() else {
        log::warn!("theme: document has no root element");
        return;
    };
    let controller = ThemeController::new(
        BrowserStore::open(window),
        DocumentRoot(root),
        config.storage_key.as_str(),
        config.theme_attribute.as_str(),
    );
    controller.init();

    let Some(button) = document.get_element_by_id(&config.toggle_id) else {
        log::debug!("theme: no #{} on this page", config.toggle_id);
        return;
    };
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        controller.advance();
    });
    match button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        Ok(()) => on_click.forget(),
        Err(err) => log::warn!("theme: cannot bind toggle: {}", describe(&err)),
    }
}
