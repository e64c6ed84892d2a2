//! Opacity and offset of the text blocks and the card stage, derived from
//! the phase, the morph signal and the selection.

use crate::constants::{
    HEADLINE_FADE_START, HEADLINE_RISE_PX, INTRO_TEXT_MORPH_CUTOFF, STAGE_SELECTED_SCALE,
    STAGE_SHIFT_FRACTION,
};
use crate::input::{map_clamped, Viewport};
use crate::phase::AnimationPhase;

/// Opacities of the three lines of the centred intro block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntroText {
    pub tagline: f32,
    pub title: f32,
    pub hint: f32,
}

impl IntroText {
    pub const HIDDEN: IntroText = IntroText {
        tagline: 0.0,
        title: 0.0,
        hint: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.tagline > 0.0 || self.title > 0.0 || self.hint > 0.0
    }
}

pub fn intro_text(phase: AnimationPhase, morph: f32) -> IntroText {
    if phase != AnimationPhase::Circle || morph >= INTRO_TEXT_MORPH_CUTOFF {
        return IntroText::HIDDEN;
    }
    IntroText {
        tagline: (0.6 - morph * 1.2).clamp(0.0, 1.0),
        title: (1.0 - morph * 2.0).clamp(0.0, 1.0),
        hint: (0.5 - morph).clamp(0.0, 1.0),
    }
}

/// Headline shown above the arc once the morph nearly completes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Headline {
    pub opacity: f32,
    pub offset_y: f32,
}

pub fn arc_headline(morph: f32) -> Headline {
    Headline {
        opacity: map_clamped(morph, HEADLINE_FADE_START, 1.0, 0.0, 1.0),
        offset_y: map_clamped(morph, HEADLINE_FADE_START, 1.0, HEADLINE_RISE_PX, 0.0),
    }
}

/// Where the card stage sits: shifted left and shrunk while a video is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageShift {
    pub x: f32,
    pub scale: f32,
}

impl Default for StageShift {
    fn default() -> Self {
        Self { x: 0.0, scale: 1.0 }
    }
}

pub fn stage_target(video_open: bool, viewport: Viewport) -> StageShift {
    if video_open {
        StageShift {
            x: -viewport.width * STAGE_SHIFT_FRACTION,
            scale: STAGE_SELECTED_SCALE,
        }
    } else {
        StageShift::default()
    }
}
