use crate::hero::HeroState;
use crate::overlay;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes an open video, same as the close button.
pub fn wire_escape_to_close(
    document: &web::Document,
    state: &Rc<RefCell<HeroState>>,
) -> EventListener {
    let state = state.clone();
    EventListener::new(document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<web::KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        if key != "Escape" {
            return;
        }
        let mut st = state.borrow_mut();
        if !overlay::is_hidden(&st.dom) {
            st.close_video();
        }
    })
}
