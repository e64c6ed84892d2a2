use crate::spring::SpringParams;
use std::time::Duration;

// Shared tuning constants for the hero sequence. All geometry is in CSS px,
// all angles in degrees.

// Virtual scroll
pub const MAX_SCROLL: f32 = 3000.0; // upper clamp of the scroll accumulator
pub const MORPH_SCROLL_END: f32 = 600.0; // scroll distance at which circle -> arc morph saturates
pub const ARC_ROTATION_MAX_DEG: f32 = 360.0; // arc rotation reached at MAX_SCROLL

// Mouse parallax
pub const PARALLAX_GAIN: f32 = 100.0; // px of parallax at either container edge

// Phase sequencer delays, measured from mount
pub const LINE_PHASE_DELAY: Duration = Duration::from_millis(500);
pub const CIRCLE_PHASE_DELAY: Duration = Duration::from_millis(2500);

// Scatter pose
pub const SCATTER_HALF_WIDTH: f32 = 750.0;
pub const SCATTER_HALF_HEIGHT: f32 = 500.0;
pub const SCATTER_MAX_ROTATION_DEG: f32 = 90.0;
pub const SCATTER_SCALE: f32 = 0.6;

// Line layout
pub const LINE_SPACING: f32 = 70.0;

// Circle layout
pub const CIRCLE_RADIUS_FACTOR: f32 = 0.35; // of min(width, height)
pub const CIRCLE_RADIUS_MAX: f32 = 350.0;

// Arc layout (desktop / mobile)
pub const MOBILE_BREAKPOINT: f32 = 768.0; // widths below this use the mobile arc
pub const ARC_HEIGHT_BASE_FACTOR: f32 = 1.5; // base radius = min(width, height * 1.5)
pub const ARC_SPREAD_DESKTOP_DEG: f32 = 130.0;
pub const ARC_SPREAD_MOBILE_DEG: f32 = 100.0;
pub const ARC_RADIUS_MUL_DESKTOP: f32 = 1.1;
pub const ARC_RADIUS_MUL_MOBILE: f32 = 1.4;
pub const ARC_APEX_FRACTION_DESKTOP: f32 = 0.25; // of height
pub const ARC_APEX_FRACTION_MOBILE: f32 = 0.35;
pub const ARC_SCALE_DESKTOP: f32 = 1.8;
pub const ARC_SCALE_MOBILE: f32 = 1.4;
pub const ARC_SWEEP_FRACTION: f32 = 0.8; // max rigid sweep as a fraction of the spread

// Arc headline fade window (in morph units)
pub const HEADLINE_FADE_START: f32 = 0.8;
pub const HEADLINE_RISE_PX: f32 = 20.0;

// Intro text is only shown below this morph value
pub const INTRO_TEXT_MORPH_CUTOFF: f32 = 0.5;

// Composition shift while a video is open
pub const STAGE_SHIFT_FRACTION: f32 = 0.25; // of container width, to the left
pub const STAGE_SELECTED_SCALE: f32 = 0.5;

// Ambient audio
pub const AMBIENT_INITIAL_VOLUME: f64 = 0.3;

// Springs
pub const SIGNAL_SPRING: SpringParams = SpringParams::new(100.0, 30.0, 0.5);
pub const CARD_SPRING: SpringParams = SpringParams::new(40.0, 15.0, 1.0);
pub const STAGE_SPRING: SpringParams = SpringParams::new(80.0, 25.0, 1.0);

// Largest integration step a spring takes; longer frames are subdivided
pub const SPRING_MAX_STEP_SEC: f32 = 1.0 / 240.0;
// Longest frame the model will integrate (tab switches, debugger pauses)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
