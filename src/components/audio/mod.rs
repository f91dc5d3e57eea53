//! Audio controller - binds the page's single `<audio>` element to the player store.
//! Store changes are pushed to the element from effects; element events come
//! back through `EventSink`. The element is created for the first episode and
//! reused afterwards; with no current episode it is paused with its source cleared.

use crate::playback::{AudioBinding, MediaElement, MediaEvent, PlayerStore};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
use bridge::{use_event_source, AudioElement};
#[cfg(target_arch = "wasm32")]
use web::{use_event_source, AudioElement};

/// Routes element events into the store and the local clock.
#[derive(Clone, Copy)]
pub(crate) struct EventSink {
    player: PlayerStore,
    binding: Signal<AudioBinding>,
}

impl EventSink {
    pub(crate) fn dispatch(mut self, event: MediaEvent, media: &impl MediaElement) {
        let mut local = self.binding.peek().clone();
        if event.touches_state() {
            debug!("media event: {}", event.dom_name());
            self.player
                .update(|state| local.handle_event(event, state, media));
        } else {
            local.tick(media);
        }
        if local != *self.binding.peek() {
            self.binding.set(local);
        }
    }
}

/// What the player panel needs from the audio surface.
#[derive(Clone, Copy, PartialEq)]
pub struct AudioHandle {
    binding: Signal<AudioBinding>,
}

impl AudioHandle {
    pub fn progress(&self) -> u32 {
        self.binding.read().progress()
    }

    pub fn seek(&mut self, seconds: u32) {
        if let Some(media) = AudioElement::existing() {
            self.binding.with_mut(|b| b.seek(seconds, &media));
        }
    }
}

pub fn use_audio_controller(player: PlayerStore) -> AudioHandle {
    let mut binding = use_signal(AudioBinding::new);
    let mut last_src = use_signal(|| None::<String>);
    let sink = EventSink { player, binding };

    use_event_source(sink);

    // Load the current episode, or unload the element when there is none.
    use_effect(move || {
        let episode = player.current_episode();
        let Some(episode) = episode else {
            if last_src.peek().is_some() {
                last_src.set(None);
                match AudioElement::existing() {
                    Some(media) => binding.with_mut(|b| b.unload(&media)),
                    None => binding.set(AudioBinding::new()),
                }
            }
            return;
        };

        if last_src.peek().as_deref() == Some(episode.url.as_str()) {
            return;
        }
        let Some(media) = AudioElement::ensure(sink) else {
            return;
        };
        last_src.set(Some(episode.url.clone()));
        binding.with_mut(|b| b.load(&episode, &media));
        binding.peek().sync_looping(&player.peek(), &media);
    });

    // Outbound play/pause: the only place the element is told to play or pause.
    let is_playing = use_memo(move || player.is_playing());
    use_effect(move || {
        let _ = is_playing();
        if let Some(media) = AudioElement::existing() {
            binding.peek().sync_playing(&player.peek(), &media);
        }
    });

    let is_looping = use_memo(move || player.is_looping());
    use_effect(move || {
        let _ = is_looping();
        if let Some(media) = AudioElement::existing() {
            binding.peek().sync_looping(&player.peek(), &media);
        }
    });

    AudioHandle { binding }
}
