use crate::hero::HeroState;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;

/// Card clicks, the overlay close button and the mute button.
pub fn wire_controls(state: &Rc<RefCell<HeroState>>) -> Vec<EventListener> {
    let dom = state.borrow().dom.clone();
    let mut listeners = Vec::with_capacity(dom.cards.len() + 2);

    for (i, card) in dom.cards.iter().enumerate() {
        let state = state.clone();
        listeners.push(EventListener::new(card, "click", move |_ev| {
            state.borrow_mut().select_card(i);
        }));
    }

    let close_state = state.clone();
    listeners.push(EventListener::new(&dom.overlay_close, "click", move |ev| {
        // Keep the click from reaching a card underneath
        ev.stop_propagation();
        close_state.borrow_mut().close_video();
    }));

    let mute_state = state.clone();
    listeners.push(EventListener::new(&dom.mute, "click", move |_ev| {
        mute_state.borrow_mut().toggle_mute();
    }));

    listeners
}
