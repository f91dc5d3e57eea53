// Browser backend: a real HtmlAudioElement with DOM listeners.
use super::EventSink;
use crate::playback::binding::MEDIA_EVENTS;
use crate::playback::MediaElement;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

pub(crate) struct AudioElement(HtmlAudioElement);

impl AudioElement {
    pub(crate) fn existing() -> Option<Self> {
        let document = window()?.document()?;
        let element = document.get_element_by_id(AUDIO_ELEMENT_ID)?;
        element.dyn_into::<HtmlAudioElement>().ok().map(Self)
    }

    /// Create the element on first use and wire its events into `sink`.
    /// The element is never removed, so listeners are attached exactly once.
    pub(crate) fn ensure(sink: EventSink) -> Option<Self> {
        if let Some(existing) = Self::existing() {
            return Some(existing);
        }

        let document = window()?.document()?;
        let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
        audio.set_id(AUDIO_ELEMENT_ID);
        audio.set_autoplay(true);
        audio.set_attribute("preload", "metadata").ok()?;

        let runtime = Runtime::current();
        for event in MEDIA_EVENTS {
            let runtime = runtime.clone();
            let callback = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                if let Some(media) = AudioElement::existing() {
                    sink.dispatch(event, &media);
                }
            }) as Box<dyn FnMut()>);
            let _ = audio
                .add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref());
            callback.forget();
        }

        document.body()?.append_child(&audio).ok()?;
        Some(Self(audio))
    }
}

impl MediaElement for AudioElement {
    fn set_source(&self, url: &str) {
        self.0.set_src(url);
    }

    fn clear_source(&self) {
        let _ = self.0.remove_attribute("src");
        self.0.load();
    }

    fn play(&self) {
        match self.0.play() {
            Ok(promise) => {
                spawn(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        warn!("Audio playback was refused: {err:?}");
                    }
                });
            }
            Err(err) => warn!("Audio playback failed to start: {err:?}"),
        }
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_looping(&self, looping: bool) {
        self.0.set_loop(looping);
    }
}

/// DOM listeners are attached in `ensure`; nothing to poll.
pub(crate) fn use_event_source(_sink: EventSink) {}
