pub mod controls;
pub mod keyboard;
pub mod pointer;
pub mod resize;
pub mod touch;

use crate::hero::HeroState;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;

pub use controls::wire_controls;
pub use keyboard::wire_escape_to_close;
pub use resize::ResizeWatch;

/// Listeners feeding the input normalizer. Dropping this detaches them all.
pub struct InputBindings {
    _listeners: Vec<EventListener>,
    _resize: ResizeWatch,
}

pub fn wire_input(state: &Rc<RefCell<HeroState>>) -> anyhow::Result<InputBindings> {
    let container = state.borrow().dom.container.clone();
    let mut listeners = Vec::with_capacity(6);
    listeners.push(pointer::wire_wheel(&container, state));
    listeners.push(pointer::wire_mousemove(&container, state));
    listeners.extend(touch::wire_touch(&container, state));
    let resize = ResizeWatch::observe(&container, state)?;
    Ok(InputBindings {
        _listeners: listeners,
        _resize: resize,
    })
}
