// Host-side tests for the page-lifecycle rules.
// The main crate is wasm-only, so the pure-Rust module is included directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn leaving_the_page_releases_a_mounted_view() {
    assert_eq!(on_page_event(PageEvent::Hide, true), LifecycleAction::Unmount);
    assert_eq!(on_page_event(PageEvent::Hide, false), LifecycleAction::Keep);
}

#[test]
fn back_forward_restore_mounts_again() {
    // pagehide into the cache unmounted the view; pageshow brings the page back
    let after_hide = on_page_event(PageEvent::Hide, true);
    assert_eq!(after_hide, LifecycleAction::Unmount);
    let restored = on_page_event(PageEvent::Show { persisted: true }, false);
    assert_eq!(restored, LifecycleAction::Mount);
}

#[test]
fn fresh_load_is_left_to_the_start_hook() {
    assert_eq!(
        on_page_event(PageEvent::Show { persisted: false }, true),
        LifecycleAction::Keep
    );
    assert_eq!(
        on_page_event(PageEvent::Show { persisted: false }, false),
        LifecycleAction::Keep
    );
}

#[test]
fn restore_never_mounts_twice() {
    assert_eq!(
        on_page_event(PageEvent::Show { persisted: true }, true),
        LifecycleAction::Keep
    );
}
