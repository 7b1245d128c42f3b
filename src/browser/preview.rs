//! Preview card bindings: `<video>` and cover image adapters plus listeners.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement, HtmlVideoElement};

use super::{describe, elements};
use crate::config::PageConfig;
use crate::preview::{report_playback_failure, MediaSurface, Overlay, PlaybackError, PreviewEvent, PreviewPlayer};

fn set_displayed(element: &HtmlElement, displayed: bool) {
    let value = if displayed { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", value) {
        log::warn!("preview: cannot set display: {}", describe(&err));
    }
}

/// A card's `<video>` element.
pub struct VideoSurface(HtmlVideoElement);

impl MediaSurface for VideoSurface {
    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_visible(&self, visible: bool) {
        set_displayed(&self.0, visible);
    }

    fn pause(&self) {
        if let Err(err) = self.0.pause() {
            log::debug!("preview: pause failed: {}", describe(&err));
        }
    }

    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self.0.play().map_err(|err| PlaybackError(describe(&err)))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                report_playback_failure(&PlaybackError(describe(&err)));
            }
        });
        Ok(())
    }
}

/// A card's cover image.
pub struct CoverImage(HtmlElement);

impl Overlay for CoverImage {
    fn set_visible(&self, visible: bool) {
        set_displayed(&self.0, visible);
    }
}

type CardPlayer = PreviewPlayer<VideoSurface, CoverImage>;

/// Bind every preview card present now. Returns how many cards were bound.
pub fn install(document: &Document, config: &PageConfig) -> usize {
    let cards = match document.query_selector_all(&config.preview_selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("preview: bad selector {:?}: {}", config.preview_selector, describe(&err));
            return 0;
        }
    };
    cards.iter().filter(|card| bind(card, config)).count()
}

fn find(card: &Element, selector: &str) -> Option<Element> {
    match card.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("preview: bad selector {selector:?}: {}", describe(&err));
            None
        }
    }
}

fn bind(card: &Element, config: &PageConfig) -> bool {
    let video = find(card, &config.video_selector).and_then(|el| el.dyn_ref::<HtmlVideoElement>().cloned());
    let cover = find(card, &config.overlay_selector).and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
    let player: Rc<CardPlayer> = Rc::new(PreviewPlayer::new(video.map(VideoSurface), cover.map(CoverImage)));
    if player.is_inert() {
        log::debug!("preview: card without {} skipped", config.video_selector);
        return false;
    }

    for event in PreviewEvent::ALL {
        let player = Rc::clone(&player);
        let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            player.handle(event);
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(event.is_touch());
        match card.add_event_listener_with_callback_and_add_event_listener_options(
            event.dom_name(),
            handler.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => handler.forget(),
            Err(err) => log::warn!("preview: cannot bind {}: {}", event.dom_name(), describe(&err)),
        }
    }
    true
}
