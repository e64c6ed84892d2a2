//! Selection of a card and the ambient-audio bookkeeping tied to it.
//!
//! Opening a video ducks the ambient track to silence and remembers the
//! level it had; closing restores exactly that level.

use crate::catalog::MediaItem;
use crate::constants::AMBIENT_INITIAL_VOLUME;
use crate::error::HeroError;

/// The handful of media-element operations the session needs.
pub trait AudioSink {
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioState {
    pub muted: bool,
    pub previous_volume: f64,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            muted: false,
            previous_volume: AMBIENT_INITIAL_VOLUME,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    None,
    Selected(usize),
}

impl SelectionState {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            SelectionState::None => None,
            SelectionState::Selected(i) => Some(i),
        }
    }

    #[inline]
    pub fn is_selected(self) -> bool {
        matches!(self, SelectionState::Selected(_))
    }
}

#[derive(Clone, Debug)]
pub struct MediaSession {
    catalog: &'static [MediaItem],
    selection: SelectionState,
    audio: AudioState,
}

impl MediaSession {
    pub fn new(catalog: &'static [MediaItem]) -> Self {
        Self {
            catalog,
            selection: SelectionState::None,
            audio: AudioState::default(),
        }
    }

    #[inline]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[inline]
    pub fn audio(&self) -> AudioState {
        self.audio
    }

    pub fn selected_item(&self) -> Option<&'static MediaItem> {
        self.selection.index().and_then(|i| self.catalog.get(i))
    }

    /// Open card `index`. Switching from one open video to another keeps
    /// the volume remembered when the first one opened.
    pub fn select<S: AudioSink + ?Sized>(
        &mut self,
        index: usize,
        sink: &mut S,
    ) -> Result<&'static MediaItem, HeroError> {
        let catalog = self.catalog;
        let item = catalog.get(index).ok_or(HeroError::UnknownItem {
            index,
            len: catalog.len(),
        })?;
        if !self.selection.is_selected() {
            self.audio.previous_volume = sink.volume();
            sink.set_volume(0.0);
        }
        self.selection = SelectionState::Selected(index);
        log::info!("[select] open {} ({})", index, item.category);
        Ok(item)
    }

    /// Close the overlay. Returns `false` when nothing was open.
    pub fn close<S: AudioSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if !self.selection.is_selected() {
            return false;
        }
        self.selection = SelectionState::None;
        sink.set_volume(self.audio.previous_volume);
        log::info!("[select] close, volume={:.2}", self.audio.previous_volume);
        true
    }

    pub fn toggle_mute<S: AudioSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        self.audio.muted = !self.audio.muted;
        sink.set_muted(self.audio.muted);
        log::info!("[audio] muted={}", self.audio.muted);
        self.audio.muted
    }
}
