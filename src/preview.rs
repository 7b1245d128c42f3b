//! Hover/touch video preview for cards.
//!
//! Each card pairs a muted preview video with an optional cover image. Entering
//! the card (mouse or touch) hides the cover and plays the video from the start;
//! leaving pauses, rewinds, and restores the cover. Cards never share state.
//!
//! ```text
//!            enter / touchstart
//!   Idle  ─────────────────────────▶  Previewing
//!     ▲                                   │
//!     └───────────────────────────────────┘
//!            leave / touchend
//! ```
//!
//! Starting playback is the only fallible step. A rejected play request is
//! logged and otherwise ignored: the video stays visible on its first frame
//! and the next stop event restores the cover as usual.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::cell::Cell;

/// Playback request failure (autoplay policy, decode error, detached element).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("preview playback failed: {0}")]
pub struct PlaybackError(pub String);

/// Pointer and touch events a card responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
}

impl PreviewEvent {
    pub const ALL: [PreviewEvent; 4] = [Self::PointerEnter, Self::PointerLeave, Self::TouchStart, Self::TouchEnd];

    /// DOM event type to listen for.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::PointerEnter => "mouseenter",
            Self::PointerLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
        }
    }

    /// Touch listeners never call `preventDefault`, so they register passive.
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchEnd)
    }

    #[must_use]
    pub fn starts_preview(self) -> bool {
        matches!(self, Self::PointerEnter | Self::TouchStart)
    }
}

/// Preview state for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    /// Cover visible, video hidden and paused at the start.
    #[default]
    Idle,
    /// Cover hidden, video visible and playing (or attempting to).
    Previewing,
}

/// The card's video element.
pub trait MediaSurface {
    fn set_muted(&self, muted: bool);
    fn set_current_time(&self, seconds: f64);
    fn set_visible(&self, visible: bool);
    fn pause(&self);

    /// Request playback.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] if the request is rejected synchronously.
    /// Implementations backed by an asynchronous request report later
    /// rejection through [`report_playback_failure`].
    fn play(&self) -> Result<(), PlaybackError>;
}

/// The card's static cover image.
pub trait Overlay {
    fn set_visible(&self, visible: bool);
}

/// Log a playback failure. Never propagates.
pub fn report_playback_failure(err: &PlaybackError) {
    log::warn!("{err}");
}

/// State machine driving one card's video and cover.
pub struct PreviewPlayer<V, O> {
    video: Option<V>,
    overlay: Option<O>,
    state: Cell<PreviewState>,
}

impl<V: MediaSurface, O: Overlay> PreviewPlayer<V, O> {
    pub fn new(video: Option<V>, overlay: Option<O>) -> Self {
        Self { video, overlay, state: Cell::new(PreviewState::Idle) }
    }

    #[must_use]
    pub fn state(&self) -> PreviewState {
        self.state.get()
    }

    /// A card without a video ignores every event.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.video.is_none()
    }

    pub fn video(&self) -> Option<&V> {
        self.video.as_ref()
    }

    pub fn overlay(&self) -> Option<&O> {
        self.overlay.as_ref()
    }

    /// Feed one event through the state machine and return the new state.
    pub fn handle(&self, event: PreviewEvent) -> PreviewState {
        let Some(video) = &self.video else {
            return self.state.get();
        };
        if event.starts_preview() {
            // Touch devices follow touchstart with a synthetic mouseenter.
            if self.state.get() == PreviewState::Previewing {
                return PreviewState::Previewing;
            }
            self.start(video);
            self.state.set(PreviewState::Previewing);
        } else {
            self.stop(video);
            self.state.set(PreviewState::Idle);
        }
        self.state.get()
    }

    fn start(&self, video: &V) {
        if let Some(overlay) = &self.overlay {
            overlay.set_visible(false);
        }
        video.set_current_time(0.0);
        video.set_visible(true);
        video.set_muted(true);
        if let Err(err) = video.play() {
            report_playback_failure(&err);
        }
    }

    fn stop(&self, video: &V) {
        video.pause();
        video.set_current_time(0.0);
        video.set_visible(false);
        if let Some(overlay) = &self.overlay {
            overlay.set_visible(true);
        }
    }
}
