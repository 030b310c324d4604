//! Bridge to the managed auth + realtime document backend, and the
//! guestbook DOM it feeds.
//!
//! The backend is a black box behind five JS functions (see
//! `js/guestbook.js`). Both listeners deliver full snapshots, never deltas,
//! and both hand back an unsubscribe handle that [`Subscription`] invokes on
//! drop so nothing fires after teardown.

use crate::dom;
use crate::ui;
use folio_core::{format_age, validate_draft, GuestbookEntry, GuestbookFeed, Identity};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(module = "/js/guestbook.js")]
extern "C" {
    #[wasm_bindgen(js_name = watchAuth)]
    fn js_watch_auth(callback: &js_sys::Function) -> js_sys::Function;

    #[wasm_bindgen(js_name = watchEntries)]
    fn js_watch_entries(
        order_field: &str,
        descending: bool,
        callback: &js_sys::Function,
    ) -> js_sys::Function;

    #[wasm_bindgen(js_name = signIn, catch)]
    async fn js_sign_in() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signOut, catch)]
    async fn js_sign_out() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = addEntry, catch)]
    async fn js_add_entry(
        name: &str,
        uid: &str,
        photo_url: Option<String>,
        text: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Live backend subscription; dropping it unsubscribes.
pub struct Subscription {
    unsubscribe: Option<js_sys::Function>,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            let _ = f.call0(&JsValue::NULL);
        }
    }
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn number_field(value: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn identity_from_js(value: &JsValue) -> Option<Identity> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(Identity {
        uid: string_field(value, "uid")?,
        display_name: string_field(value, "displayName")
            .unwrap_or_else(|| "Anonymous".to_owned()),
        photo_url: string_field(value, "photoURL"),
    })
}

fn entries_from_js(value: &JsValue) -> Vec<GuestbookEntry> {
    let Ok(array) = value.clone().dyn_into::<js_sys::Array>() else {
        return Vec::new();
    };
    array
        .iter()
        .filter_map(|item| {
            Some(GuestbookEntry {
                id: string_field(&item, "id")?,
                author_name: string_field(&item, "name")
                    .unwrap_or_else(|| "Anonymous".to_owned()),
                author_uid: string_field(&item, "uid").unwrap_or_default(),
                photo_url: string_field(&item, "photo"),
                text: string_field(&item, "text").unwrap_or_default(),
                created_at_ms: number_field(&item, "createdAtMs"),
            })
        })
        .collect()
}

/// Wires the guestbook section: auth state, the live message list and the
/// compose form. Keep the returned value alive for as long as the section
/// is on screen.
pub struct GuestbookPanel {
    _auth_sub: Subscription,
    _entries_sub: Subscription,
}

impl GuestbookPanel {
    pub fn mount(document: &web::Document) -> anyhow::Result<GuestbookPanel> {
        let identity: Rc<RefCell<Option<Identity>>> = Rc::new(RefCell::new(None));
        let feed = Rc::new(RefCell::new(GuestbookFeed::new()));

        render_feed(document, &feed.borrow());
        render_auth(document, None);

        let auth_sub = {
            let document = document.clone();
            let identity = identity.clone();
            let callback = Closure::wrap(Box::new(move |value: JsValue| {
                let who = identity_from_js(&value);
                match &who {
                    Some(id) => log::info!("signed in as {}", id.display_name),
                    None => log::info!("signed out"),
                }
                render_auth(&document, who.as_ref());
                *identity.borrow_mut() = who;
            }) as Box<dyn FnMut(JsValue)>);
            let unsubscribe = js_watch_auth(callback.as_ref().unchecked_ref());
            Subscription {
                unsubscribe: Some(unsubscribe),
                _callback: callback,
            }
        };

        // Newest messages first; every change replays the whole collection
        let entries_sub = {
            let document = document.clone();
            let feed = feed.clone();
            let callback = Closure::wrap(Box::new(move |value: JsValue| {
                let entries = entries_from_js(&value);
                feed.borrow_mut().apply_snapshot(entries);
                render_feed(&document, &feed.borrow());
            }) as Box<dyn FnMut(JsValue)>);
            let unsubscribe = js_watch_entries("createdAt", true, callback.as_ref().unchecked_ref());
            Subscription {
                unsubscribe: Some(unsubscribe),
                _callback: callback,
            }
        };

        wire_buttons(document, identity);

        Ok(GuestbookPanel {
            _auth_sub: auth_sub,
            _entries_sub: entries_sub,
        })
    }
}

fn wire_buttons(document: &web::Document, identity: Rc<RefCell<Option<Identity>>>) {
    {
        let document_cb = document.clone();
        dom::add_click_listener(document, "guestbook-sign-in", move || {
            let document = document_cb.clone();
            spawn_local(async move {
                if let Err(e) = js_sign_in().await {
                    // Popup closed or rejected: stay signed out, tell the user
                    log::warn!("sign-in failed: {:?}", e);
                    ui::toast(&document, "Sign-in was cancelled");
                }
            });
        });
    }
    {
        let document_cb = document.clone();
        dom::add_click_listener(document, "guestbook-sign-out", move || {
            let document = document_cb.clone();
            spawn_local(async move {
                if let Err(e) = js_sign_out().await {
                    log::warn!("sign-out failed: {:?}", e);
                    ui::toast(&document, "Sign-out failed");
                }
            });
        });
    }
    {
        let document_cb = document.clone();
        dom::add_click_listener(document, "guestbook-send", move || {
            submit_draft(&document_cb, &identity);
        });
    }
}

fn submit_draft(document: &web::Document, identity: &Rc<RefCell<Option<Identity>>>) {
    let Some(input) = document
        .get_element_by_id("guestbook-input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };

    let who = identity.borrow().clone();
    let text = match validate_draft(&input.value(), who.as_ref()) {
        Ok(text) => text,
        Err(e) => {
            ui::toast(document, &e.to_string());
            return;
        }
    };
    let Some(who) = who else { return };

    input.set_value("");
    let document = document.clone();
    spawn_local(async move {
        if let Err(e) = js_add_entry(&who.display_name, &who.uid, who.photo_url.clone(), &text).await
        {
            // Not retried; the snapshot listener never sees the message and
            // the user is told why
            log::warn!("add entry failed: {:?}", e);
            ui::toast(&document, "Could not send your message");
        }
    });
}

fn render_auth(document: &web::Document, identity: Option<&Identity>) {
    let signed_in = identity.is_some();
    toggle(document, "guestbook-compose", signed_in);
    toggle(document, "guestbook-sign-in", !signed_in);
    match identity {
        Some(id) => dom::set_text(
            document,
            "guestbook-signed-in",
            &format!("Signed in as {}", id.display_name),
        ),
        None => dom::set_text(document, "guestbook-signed-in", ""),
    }
}

fn toggle(document: &web::Document, id: &str, show: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("style", if show { "" } else { "display:none" });
    }
}

fn render_feed(document: &web::Document, feed: &GuestbookFeed) {
    let Some(list) = document.get_element_by_id("guestbook-list") else {
        return;
    };
    list.set_inner_html("");
    if !feed.is_loaded() {
        append_note(document, &list, "Loading messages...");
        return;
    }
    if feed.is_empty() {
        append_note(document, &list, "No messages yet. Be the first!");
        return;
    }
    let now_ms = js_sys::Date::now();
    for entry in feed.entries() {
        let Ok(row) = document.create_element("div") else {
            continue;
        };
        row.set_class_name("guestbook-row");
        if let Ok(author) = document.create_element("span") {
            author.set_class_name("guestbook-author");
            author.set_text_content(Some(&entry.author_name));
            let _ = row.append_child(&author);
        }
        if let Ok(age) = document.create_element("span") {
            age.set_class_name("guestbook-age");
            age.set_text_content(Some(&format_age(entry.created_at_ms, now_ms)));
            let _ = row.append_child(&age);
        }
        if let Ok(text) = document.create_element("p") {
            text.set_class_name("guestbook-text");
            text.set_text_content(Some(&entry.text));
            let _ = row.append_child(&text);
        }
        let _ = list.append_child(&row);
    }
}

fn append_note(document: &web::Document, list: &web::Element, message: &str) {
    if let Ok(note) = document.create_element("p") {
        note.set_class_name("guestbook-note");
        note.set_text_content(Some(message));
        let _ = list.append_child(&note);
    }
}
