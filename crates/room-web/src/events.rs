//! Pointer event wiring.
//!
//! Pointer moves are normalized against the *current* window size on every
//! event, so viewport resizes never leave a stale mapping. Down/up feed the
//! core's click gate with the event timestamp and client pixel position; a
//! gated click dispatches the resolved action key to the modal layer.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use room_core::pointer::viewport_to_ndc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{modal, App};

pub fn wire_pointer_handlers(
    app: Rc<RefCell<App>>,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
) {
    wire_pointermove(app.clone());
    wire_pointerdown(app.clone(), canvas);
    wire_pointerup(app, document);
}

fn wire_pointermove(app: Rc<RefCell<App>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let ndc = viewport_to_ndc(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            width as f32,
            height as f32,
        );
        app.borrow_mut().engine.update_pointer(ndc.x, ndc.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(app: Rc<RefCell<App>>, canvas: &web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        app.borrow_mut().engine.pointer_down(ev.time_stamp(), pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(app: Rc<RefCell<App>>, document: &web::Document) {
    let document = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let dispatched = {
            let mut a = app.borrow_mut();
            let App { engine, scene, .. } = &mut *a;
            engine.pointer_up(ev.time_stamp(), pos, scene)
        };
        if let Some(key) = dispatched {
            modal::open(&document, key);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
