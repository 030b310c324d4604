//! Event wiring: the scroll listener that feeds the shared [`ScrollState`]
//! and the pointer handlers that drive hover/tap highlighting.

use crate::camera;
use crate::dom;
use crate::input;
use crate::overlay;
use folio_core::{world_viewport, DeviceClass, PresentationState, SceneComposer, ScrollState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach the passive scroll listener. It is the only writer of
/// [`ScrollState`]; overlay flags are re-derived and pushed to the DOM on
/// every event.
pub fn wire_scroll(scroll: Rc<RefCell<ScrollState>>, document: web::Document) {
    if let Some(window) = web::window() {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let previous = scroll.borrow().state();
            scroll
                .borrow_mut()
                .update(dom::scroll_offset(&win), dom::viewport_height(&win));
            let snapshot = *scroll.borrow();
            overlay::apply(&document, snapshot.overlay());
            let state = snapshot.state();
            if state != previous {
                log::debug!("scene phase -> {}", state.label());
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub composer: Rc<RefCell<SceneComposer>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub document: web::Document,
}

fn device_for_canvas(canvas: &web::HtmlCanvasElement) -> DeviceClass {
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let (world_width, _) = world_viewport(aspect);
    DeviceClass::classify(world_width)
}

pub fn wire_pointer(w: PointerWiring) {
    // pointermove: track the pointer for repulsion, and hover-highlight on
    // wide viewports while the grid is up
    {
        let canvas = w.canvas.clone();
        let scroll = w.scroll.clone();
        let composer = w.composer.clone();
        let pointer = w.pointer.clone();
        let document = w.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let ndc = input::pointer_ndc(&ev, &canvas);
            {
                let mut p = pointer.borrow_mut();
                p.ndc_x = ndc[0];
                p.ndc_y = ndc[1];
                p.on_canvas = true;
            }
            if scroll.borrow().state() != PresentationState::Skills {
                return;
            }
            if device_for_canvas(&canvas) != DeviceClass::Wide {
                return;
            }
            let px = input::pointer_canvas_px(&ev, &canvas);
            let (ro, rd) = camera::screen_to_world_ray(&canvas, px.x, px.y);
            let targets = composer.borrow().pick_targets();
            let hit = input::pick_nearest(ro, rd, &targets);
            let mut c = composer.borrow_mut();
            if hit != c.highlight() {
                c.set_highlight(hit);
                overlay::show_skill_detail(&document, c.highlighted_skill());
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown: tap selection on narrow viewports
    {
        let canvas = w.canvas.clone();
        let scroll = w.scroll.clone();
        let composer = w.composer.clone();
        let document = w.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if scroll.borrow().state() != PresentationState::Skills {
                return;
            }
            if device_for_canvas(&canvas) != DeviceClass::Narrow {
                return;
            }
            let px = input::pointer_canvas_px(&ev, &canvas);
            let (ro, rd) = camera::screen_to_world_ray(&canvas, px.x, px.y);
            let targets = composer.borrow().pick_targets();
            if let Some(hit) = input::pick_nearest(ro, rd, &targets) {
                let mut c = composer.borrow_mut();
                c.set_highlight(Some(hit));
                overlay::show_skill_detail(&document, c.highlighted_skill());
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave: stop repulsion and clear the hover selection
    {
        let canvas = w.canvas.clone();
        let composer = w.composer.clone();
        let pointer = w.pointer.clone();
        let document = w.document.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().on_canvas = false;
            if device_for_canvas(&canvas) == DeviceClass::Wide {
                let mut c = composer.borrow_mut();
                c.set_highlight(None);
                overlay::show_skill_detail(&document, None);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
