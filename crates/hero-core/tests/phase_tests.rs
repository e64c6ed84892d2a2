// Host-side tests for the intro phase sequence, driven by a simulated clock.

use hero_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn phase_follows_the_schedule() {
    assert_eq!(phase_at(ms(0)), AnimationPhase::Scatter);
    assert_eq!(phase_at(ms(499)), AnimationPhase::Scatter);
    assert_eq!(phase_at(ms(500)), AnimationPhase::Line);
    assert_eq!(phase_at(ms(2499)), AnimationPhase::Line);
    assert_eq!(phase_at(ms(2500)), AnimationPhase::Circle);
    assert_eq!(phase_at(ms(60_000)), AnimationPhase::Circle);
}

#[test]
fn sequencer_never_reverts() {
    let mut seq = PhaseSequencer::new();
    let mut last = seq.phase();
    // Jittery clock samples, including ones that go backwards
    for t in [0, 120, 600, 450, 1800, 2600, 2400, 100, 5000] {
        seq.advance_to(ms(t));
        assert!(seq.phase() >= last, "phase went back at t={}ms", t);
        last = seq.phase();
    }
    assert_eq!(seq.phase(), AnimationPhase::Circle);
    assert!(seq.is_settled());
}

#[test]
fn stale_timer_firings_are_ignored() {
    let mut seq = PhaseSequencer::new();
    assert!(seq.enter(AnimationPhase::Circle));
    assert!(!seq.enter(AnimationPhase::Line));
    assert!(!seq.enter(AnimationPhase::Circle));
    assert_eq!(seq.phase(), AnimationPhase::Circle);
}

#[test]
fn bottom_strip_is_never_entered() {
    let mut seq = PhaseSequencer::new();
    assert!(!seq.enter(AnimationPhase::BottomStrip));
    seq.advance_to(ms(10_000));
    assert!(!seq.enter(AnimationPhase::BottomStrip));
    assert_eq!(seq.phase(), AnimationPhase::Circle);
}

#[test]
fn schedule_fires_in_registration_order() {
    let delays: Vec<Duration> = PHASE_SCHEDULE.iter().map(|(d, _)| *d).collect();
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(PHASE_SCHEDULE[0].1, AnimationPhase::Line);
    assert_eq!(PHASE_SCHEDULE[1].1, AnimationPhase::Circle);
}

#[test]
fn schedule_delays_are_whole_timer_milliseconds() {
    // Browser timers take u32 milliseconds
    let millis: Vec<u128> = PHASE_SCHEDULE.iter().map(|(d, _)| d.as_millis()).collect();
    assert_eq!(millis, vec![500, 2500]);
    for (delay, _) in PHASE_SCHEDULE {
        assert!(delay.as_millis() <= u32::MAX as u128);
        assert_eq!(delay.subsec_nanos() % 1_000_000, 0);
    }
}
