//! Animation-frame loop.
//!
//! One `requestAnimationFrame` callback drives the whole shell: it measures
//! the frame delta, ticks the interaction engine and the pomodoro timer, and
//! applies the engine's cursor affordance to the page. The closure reschedules
//! itself through the usual `Rc<RefCell<Option<Closure>>>` knot.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use room_core::CursorAffordance;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, App};

pub struct FrameContext {
    app: Rc<RefCell<App>>,
    canvas: web::HtmlCanvasElement,
    document: web::Document,
    last: Instant,
}

impl FrameContext {
    pub fn new(
        app: Rc<RefCell<App>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
    ) -> Self {
        Self {
            app,
            canvas,
            document,
            last: Instant::now(),
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32().min(0.1);
        self.last = now;

        let mut app = self.app.borrow_mut();
        let App {
            scene,
            camera,
            engine,
            pomodoro,
            ..
        } = &mut *app;

        camera.aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        engine.tick(scene, camera, dt);

        if let Some(cursor) = engine.take_cursor_change() {
            let style = match cursor {
                CursorAffordance::Pointer => "pointer",
                CursorAffordance::Default => "default",
            };
            dom::set_body_cursor(&self.document, style);
        }

        if pomodoro.is_active() {
            pomodoro.tick(dt);
            dom::set_text(&self.document, "pomodoro-time", &pomodoro.display());
        }
    }
}

pub fn start_loop(ctx: FrameContext) {
    let ctx = Rc::new(RefCell::new(ctx));
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(cb) = f.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(window) = web::window() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
