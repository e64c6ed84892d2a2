//! Per-view state owner.
//!
//! A `HeroModel` is created when the hero mounts and dropped when it
//! unmounts. It holds everything the view mutates: the phase, the input
//! signals, the selection, and the animated pose of every card.

use crate::catalog::MediaItem;
use crate::constants::{CARD_SPRING, MAX_FRAME_DT_SEC, STAGE_SPRING};
use crate::content::{arc_headline, intro_text, stage_target, Headline, IntroText, StageShift};
use crate::error::HeroError;
use crate::input::{InputNormalizer, Signals, Viewport};
use crate::layout::{scatter_poses, solve, LayoutInput, Transform};
use crate::phase::{AnimationPhase, PhaseSequencer};
use crate::session::{AudioSink, AudioState, MediaSession, SelectionState};
use crate::spring::{Spring, TransformSpring};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Everything the binding layer needs to draw one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub phase: AnimationPhase,
    pub signals: Signals,
    /// Solver targets, one per card.
    pub targets: Vec<Transform>,
    /// Spring-animated poses to draw, one per card.
    pub cards: Vec<Transform>,
    pub intro: IntroText,
    pub headline: Headline,
    pub stage: StageShift,
    pub selection: SelectionState,
}

pub struct HeroModel {
    catalog: &'static [MediaItem],
    sequencer: PhaseSequencer,
    input: InputNormalizer,
    session: MediaSession,
    scatter: Vec<Transform>,
    cards: Vec<TransformSpring>,
    stage_x: Spring,
    stage_scale: Spring,
}

impl HeroModel {
    pub fn new<R: Rng + ?Sized>(
        catalog: &'static [MediaItem],
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let scatter = scatter_poses(catalog.len(), rng);
        let cards = scatter
            .iter()
            .map(|pose| TransformSpring::new(CARD_SPRING, *pose))
            .collect();
        Self {
            catalog,
            sequencer: PhaseSequencer::new(),
            input: InputNormalizer::new(viewport),
            session: MediaSession::new(catalog),
            scatter,
            cards,
            stage_x: Spring::new(STAGE_SPRING, 0.0),
            stage_scale: Spring::new(STAGE_SPRING, 1.0),
        }
    }

    /// Deterministic scatter poses, for tests and reproducible captures.
    pub fn with_seed(catalog: &'static [MediaItem], viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(catalog, viewport, &mut rng)
    }

    #[inline]
    pub fn catalog(&self) -> &'static [MediaItem] {
        self.catalog
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.sequencer.phase()
    }

    #[inline]
    pub fn input(&self) -> &InputNormalizer {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut InputNormalizer {
        &mut self.input
    }

    #[inline]
    pub fn scatter(&self) -> &[Transform] {
        &self.scatter
    }

    #[inline]
    pub fn selection(&self) -> SelectionState {
        self.session.selection()
    }

    #[inline]
    pub fn audio(&self) -> AudioState {
        self.session.audio()
    }

    pub fn selected_item(&self) -> Option<&'static MediaItem> {
        self.session.selected_item()
    }

    pub fn enter_phase(&mut self, phase: AnimationPhase) -> bool {
        self.sequencer.enter(phase)
    }

    pub fn advance_to(&mut self, elapsed: Duration) -> bool {
        self.sequencer.advance_to(elapsed)
    }

    pub fn on_resize(&mut self, width: f32, height: f32) -> Result<Viewport, HeroError> {
        self.input.on_resize(width, height)
    }

    pub fn select<S: AudioSink + ?Sized>(
        &mut self,
        index: usize,
        sink: &mut S,
    ) -> Result<&'static MediaItem, HeroError> {
        self.session.select(index, sink)
    }

    pub fn close<S: AudioSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        self.session.close(sink)
    }

    pub fn toggle_mute<S: AudioSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        self.session.toggle_mute(sink)
    }

    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            phase: self.sequencer.phase(),
            count: self.catalog.len(),
            viewport: self.input.viewport(),
            signals: self.input.signals(),
        }
    }

    /// Advance all springs by `dt_sec` and fill `out` with the new frame.
    /// `out` is reused across frames to avoid per-frame allocation.
    pub fn frame(&mut self, dt_sec: f32, out: &mut FrameOutput) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let signals = self.input.step(dt);
        let layout = self.layout_input();

        out.targets.clear();
        out.cards.clear();
        for (i, card) in self.cards.iter_mut().enumerate() {
            let target = solve(&layout, i, &self.scatter);
            card.set_target(&target);
            out.targets.push(target);
            out.cards.push(card.step(dt));
        }

        let selection = self.session.selection();
        let stage = stage_target(selection.is_selected(), layout.viewport);
        self.stage_x.set_target(stage.x);
        self.stage_scale.set_target(stage.scale);

        out.phase = layout.phase;
        out.signals = signals;
        out.intro = intro_text(layout.phase, signals.morph);
        out.headline = arc_headline(signals.morph);
        out.stage = StageShift {
            x: self.stage_x.step(dt),
            scale: self.stage_scale.step(dt),
        };
        out.selection = selection;
    }
}
