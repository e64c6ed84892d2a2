// Page-lifecycle rules for the mounted hero. Plain Rust so host tests can
// include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Hide,
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Mount,
    Unmount,
    Keep,
}

/// Leaving the page releases the view. A page restored from the
/// back/forward cache comes back without one and mounts again; a fresh
/// load is mounted by the start hook instead.
pub fn on_page_event(event: PageEvent, mounted: bool) -> LifecycleAction {
    match event {
        PageEvent::Hide if mounted => LifecycleAction::Unmount,
        PageEvent::Show { persisted: true } if !mounted => LifecycleAction::Mount,
        _ => LifecycleAction::Keep,
    }
}
