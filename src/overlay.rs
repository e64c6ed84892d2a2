use crate::dom::{self, HeroDom};
use hero_core::MediaItem;
use wasm_bindgen_futures::{spawn_local, JsFuture};

pub fn show(dom: &HeroDom, item: &MediaItem) {
    let video = &dom.video;
    if video.get_attribute("src").as_deref() != Some(item.video_url) {
        video.set_src(item.video_url);
    }
    dom.overlay_label.set_text_content(Some(item.category));
    dom::set_hidden(&dom.overlay, false);
    dom::set_hidden(&dom.intro, true);

    // `autoplay` covers the first load; an explicit play() restarts a
    // paused element that is being reshown.
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[select] video play rejected: {:?}", e);
            }
        });
    }
}

pub fn hide(dom: &HeroDom) {
    let video = &dom.video;
    _ = video.pause();
    _ = video.remove_attribute("src");
    video.load();
    dom::set_hidden(&dom.overlay, true);
    dom::set_hidden(&dom.intro, false);
}

#[inline]
pub fn is_hidden(dom: &HeroDom) -> bool {
    dom.overlay.class_list().contains(crate::constants::CLASS_HIDDEN)
}
