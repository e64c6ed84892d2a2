use crate::hero::HeroState;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn first_touch_y(ev: &web::Event) -> Option<f32> {
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(|t| t.touches().get(0))
        .map(|touch| touch.client_y() as f32)
}

/// Vertical swipes scroll the hero the same way the wheel does. Only
/// `touchmove` cancels the default action, so taps still reach the cards.
pub fn wire_touch(
    container: &web::HtmlElement,
    state: &Rc<RefCell<HeroState>>,
) -> [EventListener; 4] {
    let start = {
        let state = state.clone();
        EventListener::new(container, "touchstart", move |ev| {
            if let Some(y) = first_touch_y(ev) {
                state.borrow_mut().model.input_mut().on_touch_start(y);
            }
        })
    };
    let moved = {
        let state = state.clone();
        EventListener::new_with_options(
            container,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                if let Some(y) = first_touch_y(ev) {
                    state.borrow_mut().model.input_mut().on_touch_move(y);
                }
            },
        )
    };
    let end = {
        let state = state.clone();
        EventListener::new(container, "touchend", move |_ev| {
            state.borrow_mut().model.input_mut().on_touch_end();
        })
    };
    let cancel = {
        let state = state.clone();
        EventListener::new(container, "touchcancel", move |_ev| {
            state.borrow_mut().model.input_mut().on_touch_end();
        })
    };
    [start, moved, end, cancel]
}
