//! Playback core: the shared player state and its binding to a media element.

pub mod binding;
pub mod state;
pub mod store;

pub use binding::{AudioBinding, MediaElement, MediaEvent};
pub use state::PlayerState;
pub use store::{use_player, use_player_provider, PlayerStore};
