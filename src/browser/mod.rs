//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` lives here. Each submodule adapts one
//! browser object to a capability trait from the core modules and installs
//! the DOM listeners; the behavior itself stays in the core.

pub mod preview;
pub mod storage;
pub mod theme;
pub mod toast;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, NodeList, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;

/// Module start: install the logger, then set the page up once the DOM is
/// parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("vp-page: logger not installed: {err}")));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("vp-page: window has no document");
        return;
    };

    if document.ready_state() != "loading" {
        setup(&window, &document);
        return;
    }

    let (win, doc) = (window.clone(), document.clone());
    let on_ready = Closure::once_into_js(move |_event: Event| setup(&win, &doc));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("vp-page: cannot wait for DOMContentLoaded: {}", describe(&err));
    }
}

/// Run every page behavior against the parsed document.
pub fn setup(window: &Window, document: &Document) {
    let config = read_config(document);
    theme::install(window, document, &config);
    let toasts = toast::install(document, &config);
    let previews = preview::install(document, &config);
    log::info!("vp-page ready: {toasts} toast(s), {previews} preview card(s)");
}

fn read_config(document: &Document) -> PageConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    PageConfig::from_json_or_default(raw.as_deref())
}

/// Elements of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Human-readable form of a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => format!("{}: {}", String::from(error.name()), String::from(error.message())),
        None => format!("{err:?}"),
    }
}
