//! The mounted hero: one controller object per view that owns every
//! browser resource it acquires.

use crate::audio::AmbientAudio;
use crate::constants::{AMBIENT_AUDIO_URL, MUTE_LABEL_WHEN_MUTED, MUTE_LABEL_WHEN_PLAYING};
use crate::dom::{self, HeroDom};
use crate::events::{self, InputBindings};
use crate::frame::FrameLoop;
use crate::overlay;
use crate::timers;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use hero_core::{catalog, FrameOutput, HeroModel, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// State shared by the event handlers and the frame loop.
pub struct HeroState {
    pub model: HeroModel,
    pub out: FrameOutput,
    pub dom: HeroDom,
    pub audio: web::HtmlAudioElement,
}

impl HeroState {
    pub fn select_card(&mut self, index: usize) {
        let HeroState {
            model, dom, audio, ..
        } = self;
        match model.select(index, audio) {
            Ok(item) => overlay::show(dom, item),
            Err(e) => log::warn!("[select] {}", e),
        }
    }

    pub fn close_video(&mut self) {
        let HeroState {
            model, dom, audio, ..
        } = self;
        if model.close(audio) {
            overlay::hide(dom);
        }
    }

    pub fn toggle_mute(&mut self) {
        let HeroState {
            model, dom, audio, ..
        } = self;
        let muted = model.toggle_mute(audio);
        let (icon, label) = if muted {
            (dom::ICON_SOUND_OFF, MUTE_LABEL_WHEN_MUTED)
        } else {
            (dom::ICON_SOUND_ON, MUTE_LABEL_WHEN_PLAYING)
        };
        dom.mute.set_inner_html(icon);
        _ = dom.mute.set_attribute("aria-label", label);
    }
}

/// Everything acquired on mount. Fields drop in declaration order: callbacks
/// are detached first, then the audio is released, then the DOM is removed.
pub struct HeroView {
    _frame: FrameLoop,
    _timers: Vec<Timeout>,
    _input: InputBindings,
    _controls: Vec<EventListener>,
    _keys: EventListener,
    _audio: AmbientAudio,
    state: Rc<RefCell<HeroState>>,
}

impl HeroView {
    pub fn mount(document: &web::Document, container: &web::HtmlElement) -> anyhow::Result<Self> {
        let viewport = Viewport::new(
            container.offset_width() as f32,
            container.offset_height() as f32,
        )
        .unwrap_or_default();
        let model = HeroModel::new(catalog(), viewport, &mut StdRng::from_entropy());
        let dom = HeroDom::build(document, container, catalog())?;
        let audio = match AmbientAudio::start(document, AMBIENT_AUDIO_URL) {
            Ok(a) => a,
            Err(e) => {
                dom.detach();
                return Err(e);
            }
        };

        let state = Rc::new(RefCell::new(HeroState {
            model,
            out: FrameOutput::default(),
            dom,
            audio: audio.element().clone(),
        }));

        let view = Self::wire(document, audio, state.clone());
        if view.is_err() {
            state.borrow().dom.detach();
        }
        view
    }

    fn wire(
        document: &web::Document,
        audio: AmbientAudio,
        state: Rc<RefCell<HeroState>>,
    ) -> anyhow::Result<Self> {
        let input = events::wire_input(&state)?;
        let controls = events::wire_controls(&state);
        let keys = events::wire_escape_to_close(document, &state);
        let timers = timers::schedule_phases(&state);
        let frame = FrameLoop::start(state.clone());
        log::info!("[hero] mounted with {} cards", catalog().len());
        Ok(Self {
            _frame: frame,
            _timers: timers,
            _input: input,
            _controls: controls,
            _keys: keys,
            _audio: audio,
            state,
        })
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        // Runs before the fields drop, which then detach every listener and
        // release the audio element.
        if let Ok(st) = self.state.try_borrow() {
            overlay::hide(&st.dom);
            st.dom.detach();
        }
        log::info!("[hero] unmounted");
    }
}
