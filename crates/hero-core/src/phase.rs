//! Timer-driven intro sequence: scatter -> line -> circle.
//!
//! The sequencer only ever moves forward. The web front-end fires the two
//! transitions from `setTimeout` callbacks; tests drive it with a simulated
//! clock through [`PhaseSequencer::advance_to`].

use crate::constants::{CIRCLE_PHASE_DELAY, LINE_PHASE_DELAY};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimationPhase {
    #[default]
    Scatter,
    Line,
    Circle,
    /// Reserved layout slot. Never produced by the sequencer.
    BottomStrip,
}

impl AnimationPhase {
    pub fn name(self) -> &'static str {
        match self {
            AnimationPhase::Scatter => "scatter",
            AnimationPhase::Line => "line",
            AnimationPhase::Circle => "circle",
            AnimationPhase::BottomStrip => "bottom-strip",
        }
    }
}

/// Transitions in firing order, with their delay from mount.
pub const PHASE_SCHEDULE: [(Duration, AnimationPhase); 2] = [
    (LINE_PHASE_DELAY, AnimationPhase::Line),
    (CIRCLE_PHASE_DELAY, AnimationPhase::Circle),
];

/// The phase a freshly mounted view shows after `elapsed`.
pub fn phase_at(elapsed: Duration) -> AnimationPhase {
    PHASE_SCHEDULE
        .iter()
        .take_while(|(delay, _)| elapsed >= *delay)
        .last()
        .map(|&(_, phase)| phase)
        .unwrap_or_default()
}

#[derive(Clone, Debug, Default)]
pub struct PhaseSequencer {
    phase: AnimationPhase,
}

impl PhaseSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Enter `next` if it lies ahead of the current phase. Returns whether
    /// the phase changed. Stale or repeated timer firings are ignored.
    pub fn enter(&mut self, next: AnimationPhase) -> bool {
        if next == AnimationPhase::BottomStrip || next <= self.phase {
            return false;
        }
        log::info!("[phase] {} -> {}", self.phase.name(), next.name());
        self.phase = next;
        true
    }

    /// Catch the sequencer up to `elapsed` time since mount.
    pub fn advance_to(&mut self, elapsed: Duration) -> bool {
        self.enter(phase_at(elapsed))
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.phase == AnimationPhase::Circle
    }
}
