//! Per-card target transforms.
//!
//! [`solve`] is a pure function of the phase, the card index, the smoothed
//! signals and the viewport. It is evaluated once per card per frame; the
//! result is the pose the card's spring chases, not the pose it is drawn at.

use crate::constants::*;
use crate::input::{Signals, Viewport};
use crate::phase::AnimationPhase;
use glam::Vec2;
use rand::Rng;

/// Card pose relative to the centre of the stage. `+y` points down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutInput {
    pub phase: AnimationPhase,
    pub count: usize,
    pub viewport: Viewport,
    pub signals: Signals,
}

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Random "flying in" poses, drawn once per mount.
pub fn scatter_poses<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Transform> {
    (0..count)
        .map(|_| Transform {
            position: Vec2::new(
                rng.gen_range(-SCATTER_HALF_WIDTH..=SCATTER_HALF_WIDTH),
                rng.gen_range(-SCATTER_HALF_HEIGHT..=SCATTER_HALF_HEIGHT),
            ),
            rotation_deg: rng.gen_range(-SCATTER_MAX_ROTATION_DEG..=SCATTER_MAX_ROTATION_DEG),
            scale: SCATTER_SCALE,
            opacity: 0.0,
        })
        .collect()
}

/// Evenly spaced horizontal strip centred on the stage: the first and last
/// card sit symmetrically about `x = 0`.
pub fn line_position(index: usize, count: usize) -> Transform {
    let span = count.saturating_sub(1) as f32 * LINE_SPACING;
    Transform {
        position: Vec2::new(index as f32 * LINE_SPACING - span / 2.0, 0.0),
        ..Transform::IDENTITY
    }
}

pub fn circle_radius(viewport: Viewport) -> f32 {
    (viewport.min_dimension() * CIRCLE_RADIUS_FACTOR).min(CIRCLE_RADIUS_MAX)
}

/// Ring layout; cards face along the tangent.
pub fn circle_position(index: usize, count: usize, viewport: Viewport) -> Transform {
    let radius = circle_radius(viewport);
    let angle = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32 * 360.0
    };
    let rad = angle.to_radians();
    Transform {
        position: Vec2::new(rad.cos() * radius, rad.sin() * radius),
        rotation_deg: angle + 90.0,
        scale: 1.0,
        opacity: 1.0,
    }
}

/// Geometry of the large arc the cards morph onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub radius: f32,
    /// Y of the arc's centre; the apex sits `radius` above it.
    pub center_y: f32,
    pub spread_deg: f32,
    pub card_scale: f32,
}

impl ArcGeometry {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let mobile = viewport.is_mobile();
        let base_radius = viewport.width.min(viewport.height * ARC_HEIGHT_BASE_FACTOR);
        let radius = base_radius
            * if mobile {
                ARC_RADIUS_MUL_MOBILE
            } else {
                ARC_RADIUS_MUL_DESKTOP
            };
        let apex_y = viewport.height
            * if mobile {
                ARC_APEX_FRACTION_MOBILE
            } else {
                ARC_APEX_FRACTION_DESKTOP
            };
        Self {
            radius,
            center_y: apex_y + radius,
            spread_deg: if mobile {
                ARC_SPREAD_MOBILE_DEG
            } else {
                ARC_SPREAD_DESKTOP_DEG
            },
            card_scale: if mobile {
                ARC_SCALE_MOBILE
            } else {
                ARC_SCALE_DESKTOP
            },
        }
    }

    #[inline]
    pub fn start_angle_deg(&self) -> f32 {
        -90.0 - self.spread_deg / 2.0
    }

    /// Angular gap between neighbouring cards. A lone card has no gap.
    pub fn step_deg(&self, count: usize) -> f32 {
        if count > 1 {
            self.spread_deg / (count - 1) as f32
        } else {
            0.0
        }
    }

    /// Unrotated angle of card `index`. A lone card sits at the apex.
    pub fn base_angle_deg(&self, index: usize, count: usize) -> f32 {
        if count <= 1 {
            return -90.0;
        }
        self.start_angle_deg() + index as f32 * self.step_deg(count)
    }

    /// Rigid sweep applied to the whole arc for a given arc rotation.
    pub fn sweep_deg(&self, arc_rotation_deg: f32) -> f32 {
        let progress = (arc_rotation_deg / ARC_ROTATION_MAX_DEG).clamp(0.0, 1.0);
        -progress * self.spread_deg * ARC_SWEEP_FRACTION
    }
}

pub fn arc_position(
    index: usize,
    count: usize,
    viewport: Viewport,
    arc_rotation_deg: f32,
    parallax: f32,
) -> Transform {
    let arc = ArcGeometry::for_viewport(viewport);
    let angle = arc.base_angle_deg(index, count) + arc.sweep_deg(arc_rotation_deg);
    let rad = angle.to_radians();
    Transform {
        position: Vec2::new(
            rad.cos() * arc.radius + parallax,
            rad.sin() * arc.radius + arc.center_y,
        ),
        rotation_deg: angle + 90.0,
        scale: arc.card_scale,
        opacity: 1.0,
    }
}

/// Target pose of card `index`. `scatter` holds the per-mount scatter poses;
/// a missing entry falls back to a hidden identity pose.
pub fn solve(input: &LayoutInput, index: usize, scatter: &[Transform]) -> Transform {
    match input.phase {
        AnimationPhase::Scatter => scatter.get(index).copied().unwrap_or(Transform {
            opacity: 0.0,
            ..Transform::IDENTITY
        }),
        AnimationPhase::Line => line_position(index, input.count),
        AnimationPhase::Circle | AnimationPhase::BottomStrip => {
            let Signals {
                morph,
                arc_rotation_deg,
                parallax,
            } = input.signals;
            let morph = morph.clamp(0.0, 1.0);
            let circle = circle_position(index, input.count, input.viewport);
            let arc = arc_position(index, input.count, input.viewport, arc_rotation_deg, parallax);
            Transform {
                position: Vec2::new(
                    lerp(circle.position.x, arc.position.x, morph),
                    lerp(circle.position.y, arc.position.y, morph),
                ),
                rotation_deg: lerp(circle.rotation_deg, arc.rotation_deg, morph),
                scale: lerp(circle.scale, arc.scale, morph),
                opacity: 1.0,
            }
        }
    }
}

/// Targets for every card in one pass.
pub fn solve_all(input: &LayoutInput, scatter: &[Transform]) -> Vec<Transform> {
    (0..input.count).map(|i| solve(input, i, scatter)).collect()
}
