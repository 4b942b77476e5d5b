//! Browser shell for the deskroom scene.
//!
//! Owns everything the interaction core deliberately does not: the DOM event
//! stream, the animation-frame scheduler, the cursor style, the modal
//! panels, and localStorage persistence. The renderer is an external
//! collaborator; this crate only feeds the core and applies its outputs.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use room_core::widgets::{PomodoroTimer, TaskFilter, TodoList};
use room_core::{Camera, InteractionEngine, SceneGraph};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod modal;
mod storage;
mod ui;
mod world;

/// Shared application state; one `Rc<RefCell<App>>` is cloned into every
/// event closure and the frame loop.
pub struct App {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub engine: InteractionEngine,
    pub pomodoro: PomodoroTimer,
    pub todo: TodoList,
    pub todo_filter: TaskFilter,
    pub store: storage::LocalTaskStore,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("room-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #room-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Build the desk scene and register its interactive objects as raycast
    // targets, the one append the target set ever sees.
    let mut scene = SceneGraph::new();
    let targets = world::build_desk_scene(&mut scene);
    let mut engine = InteractionEngine::new();
    engine.register_targets(targets);
    log::info!(
        "[scene] {} nodes, {} raycast targets",
        scene.len(),
        engine.target_count()
    );

    let store = storage::LocalTaskStore::new();
    let todo = TodoList::load_or_default(&store);
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;

    let app = Rc::new(RefCell::new(App {
        scene,
        camera: Camera::desk_view(aspect),
        engine,
        pomodoro: PomodoroTimer::new(),
        todo,
        todo_filter: TaskFilter::All,
        store,
    }));

    events::wire_pointer_handlers(app.clone(), &canvas, &document);
    modal::wire_close_buttons(&document);
    ui::wire_todo_controls(app.clone(), &document);
    ui::wire_pomodoro_controls(app.clone(), &document);
    ui::render_todo(&document, &app.borrow());

    frame::start_loop(frame::FrameContext::new(app, canvas, document));
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
