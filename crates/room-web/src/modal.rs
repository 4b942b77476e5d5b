//! Modal panel visibility.
//!
//! Each action key maps to a `#modal-<key>` panel in the page, with a
//! matching `#modal-<key>-close` button. The shell only toggles the `display`
//! style; panel content lives entirely in the HTML.

use room_core::ActionKey;
use web_sys as web;

use crate::dom;

const ALL_KEYS: [ActionKey; 5] = [
    ActionKey::Phone,
    ActionKey::Book,
    ActionKey::Todo,
    ActionKey::Routine,
    ActionKey::Watch,
];

fn panel_id(key: ActionKey) -> String {
    format!("modal-{}", key.as_str())
}

pub fn open(document: &web::Document, key: ActionKey) {
    // One panel at a time.
    for other in ALL_KEYS {
        if other != key {
            set_visible(document, &panel_id(other), false);
        }
    }
    set_visible(document, &panel_id(key), true);
}

pub fn close(document: &web::Document, key: ActionKey) {
    set_visible(document, &panel_id(key), false);
}

pub fn wire_close_buttons(document: &web::Document) {
    for key in ALL_KEYS {
        let doc = document.clone();
        dom::add_click_listener(document, &format!("modal-{}-close", key.as_str()), move || {
            close(&doc, key);
        });
    }
}

fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let display = if visible { "flex" } else { "none" };
        _ = el.set_attribute("style", &format!("display: {display}"));
    }
}
