// Host-side tests for scroll accumulation, touch deltas, parallax and the
// smoothed signals.

use hero_core::constants::*;
use hero_core::*;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn settle(input: &mut InputNormalizer, seconds: f32) -> Signals {
    let frames = (seconds * 60.0) as usize;
    let mut s = input.signals();
    for _ in 0..frames {
        s = input.step(1.0 / 60.0);
    }
    s
}

#[test]
fn scroll_stays_clamped_for_any_delta_sequence() {
    let mut scroll = ScrollState::default();
    let deltas = [
        -50.0, 120.0, 4000.0, 10.0, -99999.0, 1e9, -1.5, 3000.0, f32::NAN, f32::INFINITY, -0.0,
    ];
    for d in deltas {
        let v = scroll.apply(d);
        assert!((0.0..=MAX_SCROLL).contains(&v), "offset {} after delta {}", v, d);
    }
}

#[test]
fn non_finite_delta_leaves_scroll_unchanged() {
    let mut scroll = ScrollState::default();
    scroll.apply(250.0);
    scroll.apply(f32::NAN);
    scroll.apply(f32::NEG_INFINITY);
    assert_eq!(scroll.offset(), 250.0);
}

#[test]
fn morph_and_rotation_targets_map_scroll_ranges() {
    let mut scroll = ScrollState::default();
    assert_eq!(scroll.morph_target(), 0.0);
    assert_eq!(scroll.arc_rotation_target(), 0.0);

    scroll.apply(300.0);
    assert!(approx_eq(scroll.morph_target(), 0.5, 1e-6));
    assert_eq!(scroll.arc_rotation_target(), 0.0);

    scroll.apply(400.0); // 700
    assert_eq!(scroll.morph_target(), 1.0);
    assert!(approx_eq(scroll.arc_rotation_target(), 15.0, 1e-4));

    scroll.apply(1e6);
    assert_eq!(scroll.offset(), MAX_SCROLL);
    assert!(approx_eq(scroll.arc_rotation_target(), 360.0, 1e-4));
}

#[test]
fn first_touch_sample_only_sets_baseline() {
    let mut input = InputNormalizer::default();
    input.on_touch_move(400.0);
    assert_eq!(input.scroll().offset(), 0.0);
    // Finger moves up 150px -> scroll forward 150
    input.on_touch_move(250.0);
    assert_eq!(input.scroll().offset(), 150.0);
}

#[test]
fn touch_start_resets_baseline() {
    let mut input = InputNormalizer::default();
    input.on_touch_start(500.0);
    input.on_touch_move(300.0);
    assert_eq!(input.scroll().offset(), 200.0);

    // New gesture far below the old one must not produce a jump
    input.on_touch_end();
    input.on_touch_start(900.0);
    input.on_touch_move(880.0);
    assert_eq!(input.scroll().offset(), 220.0);

    // Dragging down scrolls back
    input.on_touch_move(980.0);
    assert_eq!(input.scroll().offset(), 120.0);
}

#[test]
fn parallax_spans_plus_minus_gain() {
    let mut input = InputNormalizer::default();
    input.on_mouse_move(100.0, 100.0, 800.0);
    assert!(approx_eq(input.targets().parallax, -PARALLAX_GAIN, 1e-4));
    input.on_mouse_move(500.0, 100.0, 800.0);
    assert!(approx_eq(input.targets().parallax, 0.0, 1e-4));
    input.on_mouse_move(900.0, 100.0, 800.0);
    assert!(approx_eq(input.targets().parallax, PARALLAX_GAIN, 1e-4));
}

#[test]
fn zero_width_container_ignores_mouse() {
    let mut input = InputNormalizer::default();
    input.on_mouse_move(300.0, 0.0, 800.0);
    let before = input.targets().parallax;
    input.on_mouse_move(10.0, 0.0, 0.0);
    assert_eq!(input.targets().parallax, before);
}

#[test]
fn invalid_resize_keeps_previous_viewport() {
    let mut input = InputNormalizer::default();
    input.on_resize(1280.0, 720.0).unwrap();
    assert!(matches!(
        input.on_resize(f32::NAN, 720.0),
        Err(HeroError::InvalidViewport { .. })
    ));
    assert!(input.on_resize(-1.0, 10.0).is_err());
    assert_eq!(input.viewport(), Viewport::new(1280.0, 720.0).unwrap());
}

#[test]
fn mobile_breakpoint() {
    assert!(Viewport::new(500.0, 900.0).unwrap().is_mobile());
    assert!(Viewport::new(767.9, 900.0).unwrap().is_mobile());
    assert!(!Viewport::new(768.0, 900.0).unwrap().is_mobile());
}

#[test]
fn signals_settle_on_their_targets() {
    let mut input = InputNormalizer::new(Viewport::new(1280.0, 720.0).unwrap());
    input.on_wheel(700.0);
    input.on_mouse_move(1280.0, 0.0, 1280.0);
    let s = settle(&mut input, 3.0);
    assert!(approx_eq(s.morph, 1.0, 1e-3));
    assert!(approx_eq(s.arc_rotation_deg, 15.0, 1e-2));
    assert!(approx_eq(s.parallax, PARALLAX_GAIN, 1e-2));
}

#[test]
fn smoothing_lags_behind_raw_input() {
    let mut input = InputNormalizer::default();
    input.on_wheel(600.0);
    let s = input.step(1.0 / 60.0);
    assert!(s.morph > 0.0 && s.morph < 0.5, "morph {} jumped", s.morph);
}

#[test]
fn smoothed_morph_is_monotonic_without_overshoot() {
    let mut input = InputNormalizer::default();
    input.on_wheel(MAX_SCROLL);
    let mut prev = 0.0;
    for _ in 0..240 {
        let s = input.step(1.0 / 60.0);
        assert!(s.morph >= prev - 1e-6);
        assert!(s.morph <= 1.0);
        prev = s.morph;
    }
}
