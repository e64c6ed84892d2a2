use crate::constants::*;
use anyhow::anyhow;
use hero_core::MediaItem;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOGO_SVG: &str = r##"<svg viewBox="0 0 64 64" aria-hidden="true"><circle cx="32" cy="32" r="32" fill="#ef4444" fill-opacity="0.1"/><circle cx="32" cy="32" r="24" fill="#ef4444" fill-opacity="0.2"/><circle cx="32" cy="32" r="16" fill="#dc2626"/><circle cx="32" cy="32" r="4" fill="#111827"/><line x1="32" y1="32" x2="50" y2="14" stroke="#1F2937" stroke-width="2.5" stroke-linecap="round"/><path d="M 50 14 L 45 16 M 50 14 L 48 19" stroke="#1F2937" stroke-width="2.5" stroke-linecap="round" fill="none"/></svg>"##;

pub const ICON_SOUND_ON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M11 5L6 9H2v6h4l5 4V5z"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14M15.54 8.46a5 5 0 0 1 0 7.07"/></svg>"#;
pub const ICON_SOUND_OFF: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M11 5L6 9H2v6h4l5 4V5z"/><line x1="23" y1="9" x2="17" y2="15"/><line x1="17" y1="9" x2="23" y2="15"/></svg>"#;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("createElement({}) failed: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("<{}> has an unexpected element type", tag))
}

pub fn element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = create(document, tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn text(
    document: &web::Document,
    tag: &str,
    class: &str,
    content: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("appendChild failed: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_hidden(el: &web::HtmlElement, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1(CLASS_HIDDEN)
    } else {
        cl.remove_1(CLASS_HIDDEN)
    };
}

/// Every element the hero creates inside its container.
#[derive(Clone)]
pub struct HeroDom {
    pub container: web::HtmlElement,
    pub logo: web::HtmlElement,
    pub intro: web::HtmlElement,
    pub intro_tagline: web::HtmlElement,
    pub intro_title: web::HtmlElement,
    pub intro_hint: web::HtmlElement,
    pub headline: web::HtmlElement,
    pub stage: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    pub overlay: web::HtmlElement,
    pub video: web::HtmlVideoElement,
    pub overlay_close: web::HtmlElement,
    pub overlay_label: web::HtmlElement,
    pub mute: web::HtmlElement,
}

impl HeroDom {
    pub fn build(
        document: &web::Document,
        container: &web::HtmlElement,
        items: &[MediaItem],
    ) -> anyhow::Result<Self> {
        let logo = element(document, "div", CLASS_LOGO)?;
        logo.set_inner_html(&format!("{}<span>{}</span>", LOGO_SVG, BRAND_NAME));

        let intro = element(document, "div", CLASS_INTRO)?;
        let intro_tagline = text(document, "p", CLASS_TAGLINE, TAGLINE)?;
        let intro_title = text(document, "h1", CLASS_TITLE, TITLE)?;
        let intro_hint = text(document, "p", CLASS_HINT, SCROLL_HINT)?;
        for el in [&intro_tagline, &intro_title, &intro_hint] {
            set_style(el, "opacity", "0");
            append(&intro, el)?;
        }

        let headline = element(document, "div", CLASS_HEADLINE)?;
        append(&headline, &text(document, "p", CLASS_TAGLINE, TAGLINE)?)?;
        append(&headline, &text(document, "h2", CLASS_TITLE, TITLE)?)?;
        append(&headline, &text(document, "p", CLASS_BODY, HEADLINE_BODY)?)?;
        set_style(&headline, "opacity", "0");

        let stage = element(document, "div", CLASS_STAGE)?;
        let cards = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let card = build_card(document, i, item)?;
                append(&stage, &card)?;
                Ok(card)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let overlay = element(document, "div", CLASS_OVERLAY)?;
        let video: web::HtmlVideoElement = create(document, "video")?;
        video.set_controls(true);
        video.set_loop(true);
        video.set_autoplay(true);
        _ = video.set_attribute("playsinline", "");
        _ = video.style().set_property("mask-image", VIDEO_MASK);
        _ = video.style().set_property("-webkit-mask-image", VIDEO_MASK);
        let overlay_close = text(document, "button", CLASS_OVERLAY_CLOSE, CLOSE_LABEL)?;
        let overlay_label = element(document, "div", CLASS_OVERLAY_LABEL)?;
        append(&overlay, &video)?;
        append(&overlay, &overlay_close)?;
        append(&overlay, &overlay_label)?;
        set_hidden(&overlay, true);

        let mute = element(document, "button", CLASS_MUTE)?;
        mute.set_inner_html(ICON_SOUND_ON);
        _ = mute.set_attribute("aria-label", MUTE_LABEL_WHEN_PLAYING);

        for el in [&logo, &intro, &headline, &stage, &overlay, &mute] {
            append(container, el)?;
        }

        Ok(Self {
            container: container.clone(),
            logo,
            intro,
            intro_tagline,
            intro_title,
            intro_hint,
            headline,
            stage,
            cards,
            overlay,
            video,
            overlay_close,
            overlay_label,
            mute,
        })
    }

    /// Remove everything `build` inserted.
    pub fn detach(&self) {
        for el in [
            &self.logo,
            &self.intro,
            &self.headline,
            &self.stage,
            &self.overlay,
            &self.mute,
        ] {
            el.remove();
        }
    }
}

fn build_card(
    document: &web::Document,
    index: usize,
    item: &MediaItem,
) -> anyhow::Result<web::HtmlElement> {
    let card = element(document, "div", CLASS_CARD)?;
    set_style(&card, "width", &format!("{}px", CARD_WIDTH_PX));
    set_style(&card, "height", &format!("{}px", CARD_HEIGHT_PX));
    set_style(&card, "opacity", "0");

    let inner = element(document, "div", CLASS_CARD_INNER)?;
    let front = element(document, "div", CLASS_CARD_FRONT)?;
    let img: web::HtmlImageElement = create(document, "img")?;
    img.set_src(item.thumbnail_url);
    img.set_alt(&format!("drone-{}", index));
    append(&front, &img)?;

    let back = element(document, "div", CLASS_CARD_BACK)?;
    append(&back, &text(document, "p", CLASS_KICKER, CARD_BACK_KICKER)?)?;
    append(&back, &text(document, "p", CLASS_LABEL, CARD_BACK_LABEL)?)?;

    append(&inner, &front)?;
    append(&inner, &back)?;
    append(&card, &inner)?;
    Ok(card)
}
