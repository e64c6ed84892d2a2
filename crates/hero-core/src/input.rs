//! Turns raw wheel/touch/mouse/resize input into the smoothed signals the
//! layout solver consumes.

use crate::constants::{
    ARC_ROTATION_MAX_DEG, MAX_SCROLL, MOBILE_BREAKPOINT, MORPH_SCROLL_END, PARALLAX_GAIN,
    SIGNAL_SPRING,
};
use crate::error::HeroError;
use crate::spring::Spring;

/// Virtual scroll accumulator, always within `[0, MAX_SCROLL]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
}

impl ScrollState {
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Apply a signed delta. Non-finite deltas are dropped.
    pub fn apply(&mut self, delta: f32) -> f32 {
        if delta.is_finite() {
            self.offset = (self.offset + delta).clamp(0.0, MAX_SCROLL);
        }
        self.offset
    }

    /// Circle -> arc blend target in `[0, 1]`.
    pub fn morph_target(&self) -> f32 {
        map_clamped(self.offset, 0.0, MORPH_SCROLL_END, 0.0, 1.0)
    }

    /// Arc rotation target in `[0, ARC_ROTATION_MAX_DEG]`.
    pub fn arc_rotation_target(&self) -> f32 {
        map_clamped(self.offset, MORPH_SCROLL_END, MAX_SCROLL, 0.0, ARC_ROTATION_MAX_DEG)
    }
}

/// Linear map from `[in_lo, in_hi]` to `[out_lo, out_hi]`, clamped at both ends.
#[inline]
pub fn map_clamped(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    if in_hi <= in_lo {
        return if v < in_lo { out_lo } else { out_hi };
    }
    let t = ((v - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Hero container size in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, HeroError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(HeroError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    #[inline]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Smoothed values sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Signals {
    pub morph: f32,
    pub arc_rotation_deg: f32,
    pub parallax: f32,
}

/// Owns the scroll accumulator, touch baseline, viewport and the three
/// signal springs.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    scroll: ScrollState,
    touch_baseline: Option<f32>,
    viewport: Viewport,
    morph: Spring,
    arc_rotation: Spring,
    parallax: Spring,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl InputNormalizer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll: ScrollState::default(),
            touch_baseline: None,
            viewport,
            morph: Spring::new(SIGNAL_SPRING, 0.0),
            arc_rotation: Spring::new(SIGNAL_SPRING, 0.0),
            parallax: Spring::new(SIGNAL_SPRING, 0.0),
        }
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Wheel `deltaY`; positive scrolls toward the arc.
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.push_scroll(delta_y);
    }

    pub fn on_touch_start(&mut self, client_y: f32) {
        if client_y.is_finite() {
            self.touch_baseline = Some(client_y);
        }
    }

    /// Dragging the finger up (decreasing `client_y`) scrolls forward, like
    /// a wheel. The first sample of a gesture only sets the baseline.
    pub fn on_touch_move(&mut self, client_y: f32) {
        if !client_y.is_finite() {
            return;
        }
        if let Some(prev) = self.touch_baseline.replace(client_y) {
            self.push_scroll(prev - client_y);
        }
    }

    pub fn on_touch_end(&mut self) {
        self.touch_baseline = None;
    }

    /// Pointer x relative to the container, mapped to `[-1, 1]` and scaled
    /// by the parallax gain.
    pub fn on_mouse_move(&mut self, client_x: f32, container_left: f32, container_width: f32) {
        let usable = container_width.is_finite() && container_width > 0.0;
        if !usable || !client_x.is_finite() || !container_left.is_finite() {
            return;
        }
        let normalized = ((client_x - container_left) / container_width) * 2.0 - 1.0;
        self.parallax.set_target(normalized * PARALLAX_GAIN);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<Viewport, HeroError> {
        let viewport = Viewport::new(width, height)?;
        if viewport != self.viewport {
            log::debug!("[input] viewport {}x{}", width, height);
        }
        self.viewport = viewport;
        Ok(viewport)
    }

    fn push_scroll(&mut self, delta: f32) {
        self.scroll.apply(delta);
        self.morph.set_target(self.scroll.morph_target());
        self.arc_rotation.set_target(self.scroll.arc_rotation_target());
    }

    /// Advance the springs and sample the smoothed signals.
    pub fn step(&mut self, dt_sec: f32) -> Signals {
        Signals {
            morph: self.morph.step(dt_sec).clamp(0.0, 1.0),
            arc_rotation_deg: self.arc_rotation.step(dt_sec),
            parallax: self.parallax.step(dt_sec),
        }
    }

    pub fn signals(&self) -> Signals {
        Signals {
            morph: self.morph.value().clamp(0.0, 1.0),
            arc_rotation_deg: self.arc_rotation.value(),
            parallax: self.parallax.value(),
        }
    }

    /// Signals the springs are converging on.
    pub fn targets(&self) -> Signals {
        Signals {
            morph: self.morph.target(),
            arc_rotation_deg: self.arc_rotation.target(),
            parallax: self.parallax.target(),
        }
    }
}
