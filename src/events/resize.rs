use crate::hero::HeroState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `ResizeObserver` on the hero container, disconnected on drop.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe(
        container: &web::HtmlElement,
        state: &Rc<RefCell<HeroState>>,
    ) -> anyhow::Result<Self> {
        apply_size(
            state,
            container.offset_width() as f32,
            container.offset_height() as f32,
        );

        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::ResizeObserverEntry>() {
                    let rect = entry.content_rect();
                    apply_size(&state, rect.width() as f32, rect.height() as f32);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
        observer.observe(container);
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

fn apply_size(state: &Rc<RefCell<HeroState>>, width: f32, height: f32) {
    if let Err(e) = state.borrow_mut().model.on_resize(width, height) {
        log::warn!("[input] ignoring resize: {}", e);
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
