//! Playback state: the current playlist, the position in it, and the transport flags.

use crate::api::Episode;
use dioxus::logger::tracing::debug;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    #[cfg(test)]
    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Always true while shuffling, even for an empty or single-episode list.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Replace the playlist with a single episode and start it.
    pub fn play(&mut self, episode: Episode) {
        debug!("play single episode {}", episode.id);
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the playlist and start at `index`. The caller keeps `index` in range.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        debug!("play list of {} starting at {index}", list.len());
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        debug!("toggle play -> {}", self.is_playing);
    }

    /// Mirror a play/pause the media element reported on its own.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!("toggle loop -> {}", self.is_looping);
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!("toggle shuffle -> {}", self.is_shuffling);
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    /// Advance to the next episode, or to a uniformly random one while shuffling.
    /// The random pick may land on the current episode again.
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                return;
            }
            self.current_episode_index = rng.gen_range(0..self.episode_list.len());
            debug!("shuffle -> {}", self.current_episode_index);
        } else if self.has_next() {
            self.current_episode_index += 1;
            debug!("next -> {}", self.current_episode_index);
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
            debug!("previous -> {}", self.current_episode_index);
        }
    }

    /// Drop the playlist once playback has nowhere left to go.
    pub fn clear_player_state(&mut self) {
        debug!("clear player state");
        self.episode_list.clear();
        self.current_episode_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn episode(n: usize) -> Episode {
        Episode {
            id: format!("ep-{n}"),
            title: format!("Episode {n}"),
            members: "Diego e Richard".to_string(),
            duration: 60 * n as u32,
            url: format!("https://example.com/{n}.m4a"),
            ..Episode::default()
        }
    }

    fn playlist(len: usize) -> Vec<Episode> {
        (0..len).map(episode).collect()
    }

    #[test]
    fn play_list_sets_list_index_and_playing() {
        for len in 1..5 {
            for index in 0..len {
                let mut state = PlayerState::new();
                state.play_list(playlist(len), index);
                assert_eq!(state.episode_list(), playlist(len).as_slice());
                assert_eq!(state.current_episode_index(), index);
                assert!(state.is_playing());
            }
        }
    }

    #[test]
    fn play_replaces_playlist_with_one_episode() {
        let mut state = PlayerState::new();
        state.play_list(playlist(3), 2);
        state.play(episode(7));
        assert_eq!(state.episode_list(), &[episode(7)]);
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.is_playing());
        assert_eq!(state.current_episode(), Some(&episode(7)));
    }

    #[test]
    fn play_next_at_end_without_shuffle_is_noop() {
        let mut state = PlayerState::new();
        state.play_list(playlist(3), 2);
        let before = state.clone();
        state.play_next();
        assert_eq!(state, before);
    }

    #[test]
    fn play_next_advances_by_one() {
        let mut state = PlayerState::new();
        state.play_list(playlist(3), 0);
        state.play_next();
        assert_eq!(state.current_episode_index(), 1);
        assert!(state.has_previous());
    }

    #[test]
    fn shuffled_next_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..6 {
            let mut state = PlayerState::new();
            state.play_list(playlist(len), 0);
            state.toggle_shuffle();
            for _ in 0..50 {
                state.play_next_with(&mut rng);
                assert!(state.current_episode_index() < len);
            }
        }
    }

    #[test]
    fn shuffled_next_on_empty_list_keeps_index() {
        let mut state = PlayerState::new();
        state.toggle_shuffle();
        state.play_next();
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn has_next_is_true_whenever_shuffling() {
        let mut state = PlayerState::new();
        state.toggle_shuffle();
        assert!(state.has_next());

        state.play(episode(1));
        assert!(state.has_next());

        state.toggle_shuffle();
        assert!(!state.has_next());
    }

    #[test]
    fn play_previous_at_start_is_noop() {
        let mut state = PlayerState::new();
        state.play_list(playlist(3), 0);
        let before = state.clone();
        state.play_previous();
        assert_eq!(state, before);

        state.play_list(playlist(3), 2);
        state.play_previous();
        assert_eq!(state.current_episode_index(), 1);
    }

    #[test]
    fn clear_empties_playlist() {
        let mut state = PlayerState::new();
        state.play_list(playlist(4), 3);
        state.clear_player_state();
        assert!(state.episode_list().is_empty());
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(!state.has_previous());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = PlayerState::new();
        state.toggle_play();
        assert!(state.is_playing());
        state.set_playing_state(false);
        assert!(!state.is_playing());
        state.toggle_loop();
        assert!(state.is_looping());
        state.toggle_loop();
        assert!(!state.is_looping());
    }
}
