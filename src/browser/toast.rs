//! Bootstrap toast bindings.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::{describe, elements};
use crate::config::PageConfig;
use crate::notify::{self, ToastError, ToastFactory, ToastHandle, ToastOptions};

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Toast` from the page's Bootstrap bundle.
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    pub type BootstrapToast;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Toast")]
    fn new(element: &Element, options: &JsValue) -> Result<BootstrapToast, JsValue>;

    #[wasm_bindgen(method, js_name = show)]
    fn show_toast(this: &BootstrapToast);
}

impl ToastHandle for BootstrapToast {
    fn show(&self) {
        self.show_toast();
    }
}

/// Builds `bootstrap.Toast` widgets.
pub struct BootstrapToasts;

impl ToastFactory for BootstrapToasts {
    type Element = Element;
    type Handle = BootstrapToast;

    fn construct(&self, element: &Element, options: ToastOptions) -> Result<BootstrapToast, ToastError> {
        let unavailable = |err: JsValue| ToastError::Unavailable(describe(&err));
        let js_options = js_sys::Object::new();
        js_sys::Reflect::set(&js_options, &JsValue::from_str("delay"), &JsValue::from(options.delay_ms))
            .map_err(unavailable)?;
        BootstrapToast::new(element, &js_options).map_err(unavailable)
    }
}

/// Show every pre-rendered toast. Returns how many were shown.
pub fn install(document: &Document, config: &PageConfig) -> usize {
    let found = match document.query_selector_all(&config.toast_selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("toast: bad selector {:?}: {}", config.toast_selector, describe(&err));
            return 0;
        }
    };
    notify::show_all(&BootstrapToasts, found.as_slice(), ToastOptions { delay_ms: config.toast_delay_ms })
}
