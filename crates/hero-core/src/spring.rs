//! Damped springs used to smooth input signals and card motion.

use crate::constants::SPRING_MAX_STEP_SEC;
use crate::layout::Transform;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Ratio of `damping` to critical damping; >= 1 means no overshoot.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

// Below these the spring is considered at rest and snaps onto its target.
const REST_DISPLACEMENT: f32 = 1e-4;
const REST_SPEED: f32 = 1e-3;

/// A one-dimensional mass-spring-damper chasing a movable target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump straight to `value` with no residual motion.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
    }

    /// Integrate `dt_sec` seconds, subdividing long frames so stiff settings
    /// stay stable.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        if dt_sec.is_nan() || dt_sec <= 0.0 {
            return self.value;
        }
        let substeps = (dt_sec / SPRING_MAX_STEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / substeps as f32;
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        for _ in 0..substeps {
            let force = stiffness * (self.target - self.value) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// One spring per transform channel; animates a card toward its target.
#[derive(Clone, Copy, Debug)]
pub struct TransformSpring {
    x: Spring,
    y: Spring,
    rotation: Spring,
    scale: Spring,
    opacity: Spring,
}

impl TransformSpring {
    pub fn new(params: SpringParams, initial: Transform) -> Self {
        Self {
            x: Spring::new(params, initial.position.x),
            y: Spring::new(params, initial.position.y),
            rotation: Spring::new(params, initial.rotation_deg),
            scale: Spring::new(params, initial.scale),
            opacity: Spring::new(params, initial.opacity),
        }
    }

    pub fn set_target(&mut self, target: &Transform) {
        self.x.set_target(target.position.x);
        self.y.set_target(target.position.y);
        self.rotation.set_target(target.rotation_deg);
        self.scale.set_target(target.scale);
        self.opacity.set_target(target.opacity);
    }

    pub fn step(&mut self, dt_sec: f32) -> Transform {
        Transform {
            position: Vec2::new(self.x.step(dt_sec), self.y.step(dt_sec)),
            rotation_deg: self.rotation.step(dt_sec),
            scale: self.scale.step(dt_sec),
            opacity: self.opacity.step(dt_sec).clamp(0.0, 1.0),
        }
    }

    pub fn current(&self) -> Transform {
        Transform {
            position: Vec2::new(self.x.value(), self.y.value()),
            rotation_deg: self.rotation.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value().clamp(0.0, 1.0),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest()
            && self.y.is_at_rest()
            && self.rotation.is_at_rest()
            && self.scale.is_at_rest()
            && self.opacity.is_at_rest()
    }
}
