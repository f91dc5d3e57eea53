use super::state::PlayerState;
use crate::api::Episode;
use dioxus::prelude::*;

/// Handle to the one `PlayerState` of the page session.
/// Cheap to copy. UI controls call the methods below; the audio binding applies
/// `set_playing_state` and `clear_player_state` through `update`.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerStore {
    state: Signal<PlayerState>,
}

impl PlayerStore {
    /// Snapshot of the state, subscribing the caller to changes.
    pub fn state(&self) -> PlayerState {
        self.state.read().clone()
    }

    /// Snapshot without subscribing, for event handlers.
    pub fn peek(&self) -> PlayerState {
        self.state.peek().clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn play(&mut self, episode: Episode) {
        self.state.with_mut(|s| s.play(episode));
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.state.with_mut(|s| s.play_list(list, index));
    }

    pub fn toggle_play(&mut self) {
        self.state.with_mut(PlayerState::toggle_play);
    }

    pub fn toggle_loop(&mut self) {
        self.state.with_mut(PlayerState::toggle_loop);
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.with_mut(PlayerState::toggle_shuffle);
    }

    pub fn play_next(&mut self) {
        self.state.with_mut(PlayerState::play_next);
    }

    pub fn play_previous(&mut self) {
        self.state.with_mut(PlayerState::play_previous);
    }

    /// Run an update built from the operations above, e.g. from the audio binding.
    /// Subscribers are only notified when the state actually changed.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        let (changed, out) = apply_if_changed(&self.state.peek(), f);
        if let Some(next) = changed {
            self.state.set(next);
        }
        out
    }
}

/// Run `f` on a copy of `current`; the copy comes back only when it differs.
fn apply_if_changed<R>(
    current: &PlayerState,
    f: impl FnOnce(&mut PlayerState) -> R,
) -> (Option<PlayerState>, R) {
    let mut next = current.clone();
    let out = f(&mut next);
    let changed = (next != *current).then_some(next);
    (changed, out)
}

/// Build the session's store and provide it to every descendant.
pub fn use_player_provider() -> PlayerStore {
    let state = use_signal(PlayerState::new);
    use_context_provider(|| PlayerStore { state })
}

pub fn use_player() -> PlayerStore {
    use_context::<PlayerStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(n: usize) -> Episode {
        Episode {
            id: format!("ep-{n}"),
            url: format!("https://example.com/{n}.mp3"),
            ..Episode::default()
        }
    }

    #[test]
    fn unchanged_update_yields_nothing_to_store() {
        let mut state = PlayerState::new();
        state.play_list(vec![episode(0), episode(1)], 0);

        let (changed, out) = apply_if_changed(&state, |s| {
            s.set_playing_state(true);
            s.has_next()
        });
        assert!(changed.is_none());
        assert!(out);

        let (changed, _) = apply_if_changed(&state, PlayerState::play_previous);
        assert!(changed.is_none());
    }

    #[test]
    fn changed_update_returns_new_state() {
        let mut state = PlayerState::new();
        state.play_list(vec![episode(0), episode(1)], 0);

        let (changed, _) = apply_if_changed(&state, |s| s.set_playing_state(false));
        let next = changed.expect("pause changes the state");
        assert!(!next.is_playing());
        assert!(state.is_playing());
    }
}
