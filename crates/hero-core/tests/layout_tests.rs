// Host-side tests for the layout solver. The solver is pure, so every case
// builds a LayoutInput by hand.

use hero_core::constants::*;
use hero_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const N: usize = 20;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn desktop() -> Viewport {
    Viewport::new(1280.0, 720.0).unwrap()
}

fn mobile() -> Viewport {
    Viewport::new(500.0, 800.0).unwrap()
}

fn steady(viewport: Viewport, morph: f32, arc_rotation_deg: f32, parallax: f32) -> LayoutInput {
    LayoutInput {
        phase: AnimationPhase::Circle,
        count: N,
        viewport,
        signals: Signals {
            morph,
            arc_rotation_deg,
            parallax,
        },
    }
}

#[test]
fn line_is_symmetric_with_fixed_spacing() {
    let input = LayoutInput {
        phase: AnimationPhase::Line,
        ..steady(desktop(), 0.0, 0.0, 0.0)
    };
    let xs: Vec<f32> = (0..N).map(|i| solve(&input, i, &[]).x()).collect();
    assert_eq!(xs[0], -xs[N - 1]);
    for w in xs.windows(2) {
        assert_eq!(w[1] - w[0], LINE_SPACING);
    }
    for i in 0..N {
        let t = solve(&input, i, &[]);
        assert_eq!(t.y(), 0.0);
        assert_eq!(t.rotation_deg, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
    }
}

#[test]
fn circle_items_lie_on_the_radius() {
    for viewport in [desktop(), mobile(), Viewport::new(3000.0, 2400.0).unwrap()] {
        let expected = (CIRCLE_RADIUS_FACTOR * viewport.min_dimension()).min(CIRCLE_RADIUS_MAX);
        let input = steady(viewport, 0.0, 123.0, 55.0);
        for i in 0..N {
            let t = solve(&input, i, &[]);
            assert!(
                approx_eq(t.position.length(), expected, 1e-3),
                "item {} at distance {} instead of {}",
                i,
                t.position.length(),
                expected
            );
            assert_eq!(t.scale, 1.0);
        }
    }
}

#[test]
fn circle_cards_face_tangentially() {
    let input = steady(desktop(), 0.0, 0.0, 0.0);
    for i in 0..N {
        let angle = i as f32 / N as f32 * 360.0;
        assert!(approx_eq(solve(&input, i, &[]).rotation_deg, angle + 90.0, 1e-4));
    }
}

#[test]
fn full_morph_rotation_matches_arc_angle() {
    let input = steady(desktop(), 1.0, 0.0, 0.0);
    let spread = ARC_SPREAD_DESKTOP_DEG;
    let start = -90.0 - spread / 2.0;
    let step = spread / (N - 1) as f32;
    for i in 0..N {
        let t = solve(&input, i, &[]);
        let expected = start + i as f32 * step + 90.0;
        assert!(
            approx_eq(t.rotation_deg, expected, 1e-3),
            "item {}: {} vs {}",
            i,
            t.rotation_deg,
            expected
        );
        assert!(approx_eq(t.scale, ARC_SCALE_DESKTOP, 1e-6));
    }
    // Ends of the arc mirror each other around the apex
    let first = solve(&input, 0, &[]);
    let last = solve(&input, N - 1, &[]);
    assert!(approx_eq(first.x(), -last.x(), 1e-2));
    assert!(approx_eq(first.y(), last.y(), 1e-2));
}

#[test]
fn interpolation_is_exactly_linear() {
    let viewport = desktop();
    for &morph in &[0.0_f32, 0.1, 0.25, 0.5, 0.73, 0.9, 1.0] {
        let input = steady(viewport, morph, 40.0, -30.0);
        for i in 0..N {
            let circle = circle_position(i, N, viewport);
            let arc = arc_position(i, N, viewport, 40.0, -30.0);
            let t = solve(&input, i, &[]);
            assert_eq!(t.x(), circle.x() * (1.0 - morph) + arc.x() * morph);
            assert_eq!(t.y(), circle.y() * (1.0 - morph) + arc.y() * morph);
            let lo = circle.x().min(arc.x());
            let hi = circle.x().max(arc.x());
            assert!(t.x() >= lo - 1e-3 && t.x() <= hi + 1e-3);
            assert_eq!(t.opacity, 1.0);
        }
    }
}

#[test]
fn arc_rotation_sweeps_the_whole_arc_rigidly() {
    let viewport = desktop();
    let still = steady(viewport, 1.0, 0.0, 0.0);
    let turned = steady(viewport, 1.0, 180.0, 0.0);
    let sweep = -0.5 * ARC_SPREAD_DESKTOP_DEG * ARC_SWEEP_FRACTION;
    for i in 0..N {
        let a = solve(&still, i, &[]);
        let b = solve(&turned, i, &[]);
        assert!(approx_eq(b.rotation_deg - a.rotation_deg, sweep, 1e-3));
    }
    // Rotation past the end of the scroll range does not sweep further
    let over = steady(viewport, 1.0, 720.0, 0.0);
    let full = steady(viewport, 1.0, 360.0, 0.0);
    assert_eq!(solve(&over, 3, &[]), solve(&full, 3, &[]));
}

#[test]
fn parallax_only_moves_arc_x() {
    let viewport = desktop();
    let base = steady(viewport, 1.0, 0.0, 0.0);
    let nudged = steady(viewport, 1.0, 0.0, 60.0);
    let a = solve(&base, 7, &[]);
    let b = solve(&nudged, 7, &[]);
    assert!(approx_eq(b.x() - a.x(), 60.0, 1e-3));
    assert_eq!(a.y(), b.y());

    // On the pure circle the parallax has no effect
    let c0 = solve(&steady(viewport, 0.0, 0.0, 0.0), 7, &[]);
    let c1 = solve(&steady(viewport, 0.0, 0.0, 60.0), 7, &[]);
    assert_eq!(c0, c1);
}

#[test]
fn mobile_viewport_switches_arc_geometry() {
    let arc = ArcGeometry::for_viewport(mobile());
    assert_eq!(arc.spread_deg, ARC_SPREAD_MOBILE_DEG);
    assert!(approx_eq(arc.radius, 500.0 * ARC_RADIUS_MUL_MOBILE, 1e-3));
    assert!(approx_eq(arc.center_y, 800.0 * ARC_APEX_FRACTION_MOBILE + arc.radius, 1e-3));
    assert_eq!(arc.card_scale, ARC_SCALE_MOBILE);

    let desk = ArcGeometry::for_viewport(desktop());
    assert_eq!(desk.spread_deg, ARC_SPREAD_DESKTOP_DEG);
    // min(1280, 720 * 1.5) * 1.1
    assert!(approx_eq(desk.radius, 1080.0 * ARC_RADIUS_MUL_DESKTOP, 1e-3));
}

#[test]
fn resize_to_mobile_changes_solver_output() {
    let mut model = HeroModel::with_seed(catalog(), desktop(), 7);
    model.advance_to(std::time::Duration::from_secs(3));
    let before = arc_position(4, N, model.input().viewport(), 0.0, 0.0);
    model.on_resize(500.0, 800.0).unwrap();
    let after = arc_position(4, N, model.input().viewport(), 0.0, 0.0);
    assert_ne!(before, after);
    let spread = ARC_SPREAD_MOBILE_DEG;
    let expected = -90.0 - spread / 2.0 + 4.0 * spread / (N - 1) as f32 + 90.0;
    assert!(approx_eq(after.rotation_deg, expected, 1e-3));
    assert_eq!(after.scale, ARC_SCALE_MOBILE);
}

#[test]
fn single_item_arc_is_finite_and_at_apex() {
    let viewport = desktop();
    let t = arc_position(0, 1, viewport, 90.0, 0.0);
    assert!(t.x().is_finite() && t.y().is_finite() && t.rotation_deg.is_finite());
    let arc = ArcGeometry::for_viewport(viewport);
    let sweep = arc.sweep_deg(90.0);
    assert!(approx_eq(t.rotation_deg, sweep, 1e-4));

    let at_rest = arc_position(0, 1, viewport, 0.0, 0.0);
    assert!(approx_eq(at_rest.x(), 0.0, 1e-2));
    assert!(approx_eq(at_rest.y(), arc.center_y - arc.radius, 1e-2));

    let input = LayoutInput {
        count: 1,
        ..steady(viewport, 0.6, 10.0, 0.0)
    };
    let solved = solve(&input, 0, &[]);
    assert!(solved.x().is_finite() && solved.y().is_finite());
}

#[test]
fn empty_catalog_produces_no_targets() {
    let input = LayoutInput {
        count: 0,
        ..steady(desktop(), 0.5, 0.0, 0.0)
    };
    assert!(solve_all(&input, &[]).is_empty());
}

#[test]
fn zero_viewport_yields_finite_targets() {
    let input = steady(Viewport::default(), 0.5, 30.0, 10.0);
    for t in solve_all(&input, &[]) {
        assert!(t.x().is_finite() && t.y().is_finite());
    }
}

#[test]
fn scatter_poses_stay_in_bounds_and_are_hidden() {
    let mut rng = StdRng::seed_from_u64(99);
    let poses = scatter_poses(N, &mut rng);
    assert_eq!(poses.len(), N);
    for p in &poses {
        assert!(p.x().abs() <= SCATTER_HALF_WIDTH);
        assert!(p.y().abs() <= SCATTER_HALF_HEIGHT);
        assert!(p.rotation_deg.abs() <= SCATTER_MAX_ROTATION_DEG);
        assert_eq!(p.scale, SCATTER_SCALE);
        assert_eq!(p.opacity, 0.0);
    }
}

#[test]
fn scatter_phase_returns_the_mount_poses() {
    let mut rng = StdRng::seed_from_u64(5);
    let poses = scatter_poses(N, &mut rng);
    let input = LayoutInput {
        phase: AnimationPhase::Scatter,
        ..steady(desktop(), 0.0, 0.0, 0.0)
    };
    for i in 0..N {
        assert_eq!(solve(&input, i, &poses), poses[i]);
    }
    // Same seed, same poses
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(scatter_poses(N, &mut rng), poses);
}
