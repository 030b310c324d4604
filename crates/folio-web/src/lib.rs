#![cfg(target_arch = "wasm32")]

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod guestbook;
mod input;
mod overlay;
mod render;
mod ui;

use folio_core::{SceneComposer, ScrollState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store matched to CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(canvas.clone());

    // Single source of truth for the scroll position; everything derived
    // (scene phase, overlay flags) recomputes from snapshots of this.
    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    scroll
        .borrow_mut()
        .update(dom::scroll_offset(&window), dom::viewport_height(&window));
    overlay::apply(&document, scroll.borrow().overlay());

    let composer = Rc::new(RefCell::new(SceneComposer::new(constants::SCENE_SEED)));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    events::wire_scroll(scroll.clone(), document.clone());
    events::wire_pointer(events::PointerWiring {
        canvas: canvas.clone(),
        scroll: scroll.clone(),
        composer: composer.clone(),
        pointer: pointer.clone(),
        document: document.clone(),
    });

    // Guestbook subscriptions live as long as the frame context below
    let panel = guestbook::GuestbookPanel::mount(&document)?;

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_some() {
        overlay::hide_loading(&document);
    }

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        composer,
        scroll,
        pointer,
        canvas,
        document,
        gpu,
        last_instant: instant::Instant::now(),
        last_state: None,
        shown_skill: None,
        _guestbook: panel,
    })));

    Ok(())
}
