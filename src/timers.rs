use crate::hero::HeroState;
use gloo::timers::callback::Timeout;
use hero_core::PHASE_SCHEDULE;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[inline]
fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Arm one timer per scheduled phase transition. Timers are registered in
/// schedule order, so the browser fires them in that order. Dropping a
/// `Timeout` before it fires clears it.
pub fn schedule_phases(state: &Rc<RefCell<HeroState>>) -> Vec<Timeout> {
    PHASE_SCHEDULE
        .iter()
        .map(|&(delay, phase)| {
            let state = state.clone();
            Timeout::new(millis(delay), move || {
                state.borrow_mut().model.enter_phase(phase);
            })
        })
        .collect()
}
