use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{TOAST_HIDE_MS, TOAST_ID};

/// Show a transient banner. Backend failures surface here instead of
/// blocking the page.
pub fn toast(document: &web::Document, message: &str) {
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        return;
    };
    el.set_text_content(Some(message));
    let _ = el.set_attribute("data-visible", "1");
    let _ = el.set_attribute("style", "");

    if let Some(window) = web::window() {
        let document = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(el) = document.get_element_by_id(TOAST_ID) {
                let _ = el.set_attribute("data-visible", "0");
                let _ = el.set_attribute("style", "display:none");
            }
        }) as Box<dyn FnMut()>);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOAST_HIDE_MS,
        );
        closure.forget();
    }
}
