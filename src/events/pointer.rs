use crate::hero::HeroState;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel input drives the virtual scroll; the page itself never scrolls
/// while the pointer is over the hero.
pub fn wire_wheel(container: &web::HtmlElement, state: &Rc<RefCell<HeroState>>) -> EventListener {
    let state = state.clone();
    EventListener::new_with_options(
        container,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            ev.prevent_default();
            if let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() {
                state
                    .borrow_mut()
                    .model
                    .input_mut()
                    .on_wheel(wheel.delta_y() as f32);
            }
        },
    )
}

pub fn wire_mousemove(
    container: &web::HtmlElement,
    state: &Rc<RefCell<HeroState>>,
) -> EventListener {
    let state = state.clone();
    let target = container.clone();
    EventListener::new(container, "mousemove", move |ev| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            let rect = target.get_bounding_client_rect();
            state.borrow_mut().model.input_mut().on_mouse_move(
                mouse.client_x() as f32,
                rect.left() as f32,
                rect.width() as f32,
            );
        }
    })
}
