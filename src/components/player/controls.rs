use crate::components::Icon;
use crate::playback::{PlayerState, PlayerStore};
use dioxus::prelude::*;

/// Which panel controls accept input for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PanelControls {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub repeat: bool,
    pub seek: bool,
}

impl PanelControls {
    pub(super) fn for_state(state: &PlayerState) -> Self {
        let loaded = state.current_episode().is_some();
        Self {
            shuffle: loaded && state.episode_list().len() != 1,
            previous: loaded && state.has_previous(),
            play_pause: loaded,
            next: loaded && state.has_next(),
            repeat: loaded,
            seek: loaded,
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "player-button is-active"
    } else {
        "player-button"
    }
}

/// Shuffle button - disabled for a single-episode playlist
#[component]
pub(super) fn ShuffleButton(player: PlayerStore) -> Element {
    let mut player = player;
    let state = player.state();
    let disabled = !PanelControls::for_state(&state).shuffle;

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            disabled,
            class: toggle_class(state.is_shuffling()),
            aria_label: "Embaralhar",
            onclick: move |_| player.toggle_shuffle(),
            Icon { name: "shuffle", class: "player-icon" }
        }
    }
}

/// Previous button
#[component]
pub(super) fn PrevButton(player: PlayerStore) -> Element {
    let mut player = player;
    let state = player.state();
    let disabled = !PanelControls::for_state(&state).previous;

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled,
            class: "player-button",
            aria_label: "Tocar anterior",
            onclick: move |_| player.play_previous(),
            Icon { name: "prev", class: "player-icon" }
        }
    }
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton(player: PlayerStore) -> Element {
    let mut player = player;
    let state = player.state();
    let playing = state.is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            disabled: !PanelControls::for_state(&state).play_pause,
            class: "player-button play-button",
            aria_label: if playing { "Pausar" } else { "Tocar" },
            onclick: move |_| player.toggle_play(),
            if playing {
                Icon { name: "pause", class: "player-icon" }
            } else {
                Icon { name: "play", class: "player-icon" }
            }
        }
    }
}

/// Next button - stays enabled while shuffling
#[component]
pub(super) fn NextButton(player: PlayerStore) -> Element {
    let mut player = player;
    let state = player.state();
    let disabled = !PanelControls::for_state(&state).next;

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled,
            class: "player-button",
            aria_label: "Tocar próxima",
            onclick: move |_| player.play_next(),
            Icon { name: "next", class: "player-icon" }
        }
    }
}

/// Repeat button - loops the current episode
#[component]
pub(super) fn RepeatButton(player: PlayerStore) -> Element {
    let mut player = player;
    let state = player.state();

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            disabled: !PanelControls::for_state(&state).repeat,
            class: toggle_class(state.is_looping()),
            aria_label: "Repetir",
            onclick: move |_| player.toggle_loop(),
            Icon { name: "repeat", class: "player-icon" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Episode;

    fn playlist(len: usize) -> Vec<Episode> {
        (0..len)
            .map(|n| Episode {
                id: format!("ep-{n}"),
                url: format!("https://example.com/{n}.mp3"),
                ..Episode::default()
            })
            .collect()
    }

    #[test]
    fn empty_player_disables_everything() {
        let mut state = PlayerState::new();
        state.toggle_shuffle();
        let controls = PanelControls::for_state(&state);
        assert_eq!(
            controls,
            PanelControls {
                shuffle: false,
                previous: false,
                play_pause: false,
                next: false,
                repeat: false,
                seek: false,
            }
        );
    }

    #[test]
    fn single_episode_locks_shuffle_and_navigation() {
        let mut state = PlayerState::new();
        state.play(playlist(1).remove(0));
        let controls = PanelControls::for_state(&state);
        assert!(!controls.shuffle);
        assert!(!controls.previous);
        assert!(!controls.next);
        assert!(controls.play_pause && controls.repeat && controls.seek);
    }

    #[test]
    fn navigation_follows_position() {
        let mut state = PlayerState::new();
        state.play_list(playlist(3), 0);
        let first = PanelControls::for_state(&state);
        assert!(first.shuffle && first.next && !first.previous);

        state.play_list(playlist(3), 2);
        let last = PanelControls::for_state(&state);
        assert!(last.previous && !last.next);

        state.toggle_shuffle();
        assert!(PanelControls::for_state(&state).next);
    }
}
