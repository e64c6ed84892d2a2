use crate::constants::AUDIO_UNLOCK_EVENTS;
use gloo::events::EventListener;
use hero_core::constants::AMBIENT_INITIAL_VOLUME;
use hero_core::AudioSink;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type UnlockListeners = RefCell<SmallVec<[EventListener; 4]>>;

/// The looping background track. Created on mount, paused and released on
/// drop together with any unlock listeners that never fired.
pub struct AmbientAudio {
    element: web::HtmlAudioElement,
    unlock: Rc<UnlockListeners>,
    released: Rc<Cell<bool>>,
}

impl AmbientAudio {
    pub fn start(document: &web::Document, url: &str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(url)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        element.set_loop(true);
        web::HtmlMediaElement::set_volume(&element, AMBIENT_INITIAL_VOLUME);

        let audio = Self {
            element,
            unlock: Rc::new(RefCell::new(SmallVec::new())),
            released: Rc::new(Cell::new(false)),
        };
        audio.arm_unlock(document);
        spawn_play(
            audio.element.clone(),
            audio.released.clone(),
            Rc::downgrade(&audio.unlock),
            "autoplay",
        );
        Ok(audio)
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.element
    }

    // Autoplay is commonly blocked until the user interacts with the page;
    // retry on the first gesture of each kind.
    fn arm_unlock(&self, document: &web::Document) {
        let mut listeners = self.unlock.borrow_mut();
        for kind in AUDIO_UNLOCK_EVENTS {
            let element = self.element.clone();
            let released = self.released.clone();
            let unlock = Rc::downgrade(&self.unlock);
            listeners.push(EventListener::once(document, kind, move |_ev| {
                if element.paused() {
                    spawn_play(element, released, unlock, kind);
                }
            }));
        }
    }
}

impl Drop for AmbientAudio {
    fn drop(&mut self) {
        self.released.set(true);
        _ = self.element.pause();
        _ = self.element.remove_attribute("src");
        self.element.load();
        self.unlock.borrow_mut().clear();
        log::info!("[audio] released");
    }
}

async fn play(element: &web::HtmlMediaElement) -> anyhow::Result<()> {
    let promise = element
        .play()
        .map_err(|e| anyhow::anyhow!("play: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("play rejected: {:?}", e))?;
    Ok(())
}

// Runs after the triggering handler has returned, so dropping the unlock
// listeners here never frees a closure that is still executing.
fn spawn_play(
    element: web::HtmlAudioElement,
    released: Rc<Cell<bool>>,
    unlock: Weak<UnlockListeners>,
    trigger: &'static str,
) {
    spawn_local(async move {
        if released.get() {
            return;
        }
        match play(&element).await {
            Ok(()) => {
                log::info!("[audio] playing ({})", trigger);
                if let Some(unlock) = unlock.upgrade() {
                    unlock.borrow_mut().clear();
                }
            }
            Err(e) => log::debug!("[audio] {} blocked: {}", trigger, e),
        }
        // Unmounted while the play promise was pending
        if released.get() {
            _ = element.pause();
        }
    });
}

// Explicit HtmlMediaElement paths: plain `self.volume()` would resolve back
// to this trait.
impl AudioSink for web::HtmlAudioElement {
    fn volume(&self) -> f64 {
        web::HtmlMediaElement::volume(self)
    }

    fn set_volume(&mut self, volume: f64) {
        web::HtmlMediaElement::set_volume(self, volume);
    }

    fn set_muted(&mut self, muted: bool) {
        web::HtmlMediaElement::set_muted(self, muted);
    }
}
