use crate::hero::HeroState;
use crate::render;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot = RefCell<Option<AnimationFrame>>;

impl HeroState {
    pub fn frame(&mut self, dt_sec: f32) {
        let HeroState { model, out, dom, .. } = self;
        model.frame(dt_sec, out);
        render::apply_frame(dom, out);
    }
}

/// `requestAnimationFrame` loop. Each tick requests the next one into the
/// same slot; dropping the loop drops the pending request, which cancels it.
pub struct FrameLoop {
    _pending: Rc<Slot>,
}

impl FrameLoop {
    pub fn start(state: Rc<RefCell<HeroState>>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule(state, Rc::downgrade(&pending), Instant::now());
        Self { _pending: pending }
    }
}

// The callback only holds a weak ref to the slot, so the loop dies with
// its owner.
fn schedule(state: Rc<RefCell<HeroState>>, slot: Weak<Slot>, last_instant: Instant) {
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |_timestamp| {
        let now = Instant::now();
        let dt_sec = (now - last_instant).as_secs_f32();
        state.borrow_mut().frame(dt_sec);
        schedule(state, slot, now);
    });
    *pending.borrow_mut() = Some(handle);
}
