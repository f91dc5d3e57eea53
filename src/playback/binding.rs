//! Glue between `PlayerState` and a playable media element.
//!
//! Two directions, kept apart:
//! - outbound: `sync_playing` / `sync_looping` push state onto the element;
//! - inbound: `handle_event` folds element events back into the state.
//!
//! The inbound path only ever uses `set_playing_state`, never `toggle_play`,
//! so an element `play`/`pause` echo cannot flip the state it came from.

use super::state::PlayerState;
use crate::api::Episode;

/// The media primitive the host provides (an `<audio>` element on the web).
/// Commands are fire-and-forget; outcomes arrive later as `MediaEvent`s.
pub trait MediaElement {
    fn set_source(&self, url: &str);
    /// Drop the current source but keep the element and its listeners.
    fn clear_source(&self);
    fn play(&self);
    fn pause(&self);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn set_looping(&self, looping: bool);

    /// Move back to the start once metadata has loaded. Backends that already
    /// rewound inside their own listener only need to reset their time reading.
    fn rewind_to_start(&self) {
        self.set_current_time(0.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    LoadedMetadata,
    TimeUpdate,
    Ended,
    Play,
    Pause,
}

impl MediaEvent {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn from_dom_name(name: &str) -> Option<Self> {
        MEDIA_EVENTS.into_iter().find(|event| event.dom_name() == name)
    }

    /// Time ticks only move the local clock; every other event can change `PlayerState`.
    pub fn touches_state(self) -> bool {
        self != Self::TimeUpdate
    }

    pub fn dom_name(self) -> &'static str {
        match self {
            Self::LoadedMetadata => "loadedmetadata",
            Self::TimeUpdate => "timeupdate",
            Self::Ended => "ended",
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

pub const MEDIA_EVENTS: [MediaEvent; 5] = [
    MediaEvent::LoadedMetadata,
    MediaEvent::TimeUpdate,
    MediaEvent::Ended,
    MediaEvent::Play,
    MediaEvent::Pause,
];

/// Local render state of the audio surface. Elapsed seconds live here, not in
/// `PlayerState`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioBinding {
    progress: u32,
    tracking: bool,
}

impl AudioBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole seconds elapsed in the current episode.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Point the element at a new episode. Playback starts through autoplay.
    pub fn load(&mut self, episode: &Episode, media: &impl MediaElement) {
        self.tracking = false;
        media.set_source(&episode.url);
    }

    /// The current episode went away: silence the element and zero the clock.
    pub fn unload(&mut self, media: &impl MediaElement) {
        media.pause();
        media.clear_source();
        self.reset();
    }

    /// Stop tracking and zero the clock.
    fn reset(&mut self) {
        self.tracking = false;
        self.progress = 0;
    }

    /// Outbound: make the element match `is_playing`.
    pub fn sync_playing(&self, state: &PlayerState, media: &impl MediaElement) {
        if state.current_episode().is_none() {
            return;
        }
        if state.is_playing() {
            media.play();
        } else {
            media.pause();
        }
    }

    pub fn sync_looping(&self, state: &PlayerState, media: &impl MediaElement) {
        media.set_looping(state.is_looping());
    }

    /// Inbound: fold one element event into the state and the local clock.
    pub fn handle_event(
        &mut self,
        event: MediaEvent,
        state: &mut PlayerState,
        media: &impl MediaElement,
    ) {
        match event {
            MediaEvent::LoadedMetadata => {
                media.rewind_to_start();
                self.progress = 0;
                self.tracking = true;
            }
            MediaEvent::TimeUpdate => self.tick(media),
            MediaEvent::Ended => {
                if state.has_next() {
                    state.play_next();
                } else {
                    state.clear_player_state();
                }
            }
            MediaEvent::Play => state.set_playing_state(true),
            MediaEvent::Pause => state.set_playing_state(false),
        }
    }

    /// A `timeupdate` tick. Ignored until metadata for the current source loaded.
    pub fn tick(&mut self, media: &impl MediaElement) {
        if self.tracking {
            self.progress = whole_seconds(media.current_time());
        }
    }

    /// User seek: move the element and the clock at once.
    pub fn seek(&mut self, seconds: u32, media: &impl MediaElement) {
        media.set_current_time(f64::from(seconds));
        self.progress = seconds;
    }
}

fn whole_seconds(time: f64) -> u32 {
    if time.is_finite() && time > 0.0 {
        time.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
