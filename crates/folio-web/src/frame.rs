//! The requestAnimationFrame loop: advance the scene from the latest scroll
//! snapshot and hand the instance list to the renderer.

use crate::guestbook::GuestbookPanel;
use crate::input;
use crate::overlay;
use crate::render;
use folio_core::{world_viewport, DeviceClass, FloatBounds, PresentationState, SceneComposer, ScrollState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub composer: Rc<RefCell<SceneComposer>>,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
    pub last_state: Option<PresentationState>,
    pub shown_skill: Option<usize>,
    // Keeps the backend subscriptions alive for the page lifetime; dropped
    // (and unsubscribed) with the loop.
    pub _guestbook: GuestbookPanel,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // Clamp dt so a backgrounded tab does not produce one huge step
        let dt = (now - self.last_instant).as_secs_f32().min(0.1);
        self.last_instant = now;

        let snapshot = *self.scroll.borrow();
        let state = snapshot.state();
        if self.last_state != Some(state) {
            log::debug!("scene phase -> {}", state.label());
            self.last_state = Some(state);
        }

        let width = self.canvas.width().max(1) as f32;
        let height = self.canvas.height().max(1) as f32;
        let (world_width, world_height) = world_viewport(width / height);
        let device = DeviceClass::classify(world_width);
        let bounds = FloatBounds::from_viewport(world_width, world_height);

        let pointer_world = {
            let p = self.pointer.borrow();
            p.on_canvas.then(|| {
                input::pointer_world([p.ndc_x, p.ndc_y], bounds.half_width, bounds.half_height)
            })
        };

        self.composer
            .borrow_mut()
            .update(dt, state, device, bounds, pointer_world);

        // The automatic cycler (narrow viewports) changes the selection
        // outside the pointer handlers; keep the detail panel in sync here.
        let highlight = self.composer.borrow().highlight();
        if highlight != self.shown_skill {
            self.shown_skill = highlight;
            overlay::show_skill_detail(&self.document, self.composer.borrow().highlighted_skill());
        }

        if let Some(gpu) = &mut self.gpu {
            let instances = self.composer.borrow().compose();
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
