//! Widget controls: the todo list panel and the pomodoro display.
//!
//! The todo list renders into `#todo-list` and uses one delegated click
//! listener on the list element; each rendered row carries `data-task-id`
//! and `data-action` attributes, so rows never hold their own closures.

use std::cell::RefCell;
use std::rc::Rc;

use room_core::widgets::TaskFilter;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, App};

pub fn wire_pomodoro_controls(app: Rc<RefCell<App>>, document: &web::Document) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, "pomodoro-toggle", move || {
            let mut a = app.borrow_mut();
            a.pomodoro.toggle();
            dom::set_text(&doc, "pomodoro-time", &a.pomodoro.display());
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "pomodoro-reset", move || {
            let mut a = app.borrow_mut();
            a.pomodoro.reset();
            dom::set_text(&doc, "pomodoro-time", &a.pomodoro.display());
        });
    }
}

pub fn wire_todo_controls(app: Rc<RefCell<App>>, document: &web::Document) {
    wire_add(app.clone(), document);
    wire_filters(app.clone(), document);
    wire_list_delegation(app, document);
}

fn wire_add(app: Rc<RefCell<App>>, document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "todo-add", move || {
        let Some(input) = doc
            .get_element_by_id("todo-input")
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        {
            let mut a = app.borrow_mut();
            let App { todo, store, .. } = &mut *a;
            if todo.add(&input.value()).is_some() {
                if let Err(e) = todo.save(store) {
                    log::warn!("[todo] save failed: {e}");
                }
                input.set_value("");
            }
        }
        render_todo(&doc, &app.borrow());
    });
}

fn wire_filters(app: Rc<RefCell<App>>, document: &web::Document) {
    let filters = [
        ("todo-filter-all", TaskFilter::All),
        ("todo-filter-active", TaskFilter::Active),
        ("todo-filter-completed", TaskFilter::Completed),
    ];
    for (id, filter) in filters {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move || {
            app.borrow_mut().todo_filter = filter;
            render_todo(&doc, &app.borrow());
        });
    }
}

fn wire_list_delegation(app: Rc<RefCell<App>>, document: &web::Document) {
    let Some(list) = document.get_element_by_id("todo-list") else {
        return;
    };
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(row) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-task-id]").ok().flatten())
        else {
            return;
        };
        let Some(id) = row
            .get_attribute("data-task-id")
            .and_then(|v| v.parse::<u64>().ok())
        else {
            return;
        };
        let action = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.get_attribute("data-action"));

        {
            let mut a = app.borrow_mut();
            let App { todo, store, .. } = &mut *a;
            let changed = match action.as_deref() {
                Some("remove") => todo.remove(id),
                _ => todo.toggle(id),
            };
            if changed {
                if let Err(e) = todo.save(store) {
                    log::warn!("[todo] save failed: {e}");
                }
            }
        }
        render_todo(&doc, &app.borrow());
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn render_todo(document: &web::Document, app: &App) {
    let Some(list) = document.get_element_by_id("todo-list") else {
        return;
    };
    let mut html = String::new();
    for task in app.todo.filtered(app.todo_filter) {
        let class = if task.completed {
            "todo-item completed"
        } else {
            "todo-item"
        };
        html.push_str(&format!(
            "<li class=\"{class}\" data-task-id=\"{id}\">\
             <span class=\"todo-text\">{text}</span>\
             <button data-action=\"remove\" data-task-id=\"{id}\">x</button>\
             </li>",
            id = task.id,
            text = escape_html(&task.text),
        ));
    }
    list.set_inner_html(&html);

    let active = app.todo.active_count();
    let label = if active == 1 {
        "1 task left".to_string()
    } else {
        format!("{active} tasks left")
    };
    dom::set_text(document, "todo-count", &label);
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
