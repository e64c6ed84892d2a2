#![cfg(target_arch = "wasm32")]
//! Browser binding for the landing hero: builds the DOM, feeds browser
//! events into `hero_core`, and writes each frame back as CSS transforms.

use crate::lifecycle::{LifecycleAction, PageEvent};
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod lifecycle;
mod overlay;
mod render;
mod timers;

thread_local! {
    static MOUNTED: RefCell<Option<hero::HeroView>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");
    wire_page_lifecycle();

    if let Err(e) = try_mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount the hero into `#hero`. A second call while mounted is a no-op.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsError> {
    try_mount().map_err(|e| JsError::new(&format!("{:?}", e)))
}

fn try_mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(constants::HERO_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::HERO_CONTAINER_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let view = hero::HeroView::mount(&document, &container)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(view));
    Ok(())
}

/// Tear the hero down: cancels timers and the frame loop, detaches every
/// listener, stops and releases the audio, removes the hero's nodes.
#[wasm_bindgen]
pub fn unmount() {
    let view = MOUNTED.with(|m| m.borrow_mut().take());
    drop(view);
}

// Registered once for the module's lifetime; each mount and unmount goes
// through `MOUNTED`.
fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    EventListener::new(&window, "pagehide", |ev| on_page_transition(ev, true)).forget();
    EventListener::new(&window, "pageshow", |ev| on_page_transition(ev, false)).forget();
}

fn on_page_transition(ev: &web::Event, hidden: bool) {
    let event = if hidden {
        PageEvent::Hide
    } else {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        PageEvent::Show { persisted }
    };
    let mounted = MOUNTED.with(|m| m.borrow().is_some());
    match lifecycle::on_page_event(event, mounted) {
        LifecycleAction::Mount => {
            log::info!("[hero] restored from back/forward cache");
            if let Err(e) = try_mount() {
                log::error!("remount error: {:?}", e);
            }
        }
        LifecycleAction::Unmount => unmount(),
        LifecycleAction::Keep => {}
    }
}
