//! Writes a frame's poses onto the DOM as CSS transforms.

use crate::dom::{set_style, HeroDom};
use hero_core::{FrameOutput, Transform};
use web_sys as web;

/// Cards are anchored at the stage centre; the solver's coordinates are
/// offsets from there.
#[inline]
pub fn card_transform_css(t: &Transform) -> String {
    format!(
        "translate(-50%, -50%) translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.4})",
        t.x(),
        t.y(),
        t.rotation_deg,
        t.scale
    )
}

fn apply_card(el: &web::HtmlElement, t: &Transform) {
    set_style(el, "transform", &card_transform_css(t));
    set_style(el, "opacity", &format!("{:.3}", t.opacity));
}

pub fn apply_frame(dom: &HeroDom, out: &FrameOutput) {
    for (el, t) in dom.cards.iter().zip(&out.cards) {
        apply_card(el, t);
    }

    set_style(
        &dom.stage,
        "transform",
        &format!("translateX({:.2}px) scale({:.4})", out.stage.x, out.stage.scale),
    );

    let intro = out.intro;
    set_style(&dom.intro_tagline, "opacity", &format!("{:.3}", intro.tagline));
    set_style(&dom.intro_title, "opacity", &format!("{:.3}", intro.title));
    set_style(&dom.intro_hint, "opacity", &format!("{:.3}", intro.hint));

    let headline = out.headline;
    set_style(&dom.headline, "opacity", &format!("{:.3}", headline.opacity));
    set_style(
        &dom.headline,
        "transform",
        &format!("translate(-50%, {:.2}px)", headline.offset_y),
    );
}
