use crate::components::audio::use_audio_controller;
use crate::components::Icon;
use crate::playback::PlayerStore;
use crate::utils::format_time_to_string;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PanelControls, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};

/// Persistent player panel. Hosts the audio controller for the whole page.
#[component]
pub fn Player(player: PlayerStore) -> Element {
    let mut audio = use_audio_controller(player);

    let state = player.state();
    let episode = state.current_episode().cloned();
    let can_seek = PanelControls::for_state(&state).seek;
    let progress = audio.progress();
    let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);

    let on_seek = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            audio.seek(value.max(0.0).round() as u32);
        }
    };

    rsx! {
        div { class: "player-container",
            header {
                Icon { name: "headphones", class: "player-header-icon" }
                div {
                    strong { "Tocando agora" }
                    if let Some(ref episode) = episode {
                        strong { class: "player-title", "{episode.title}" }
                        span { class: "player-members", "{episode.members}" }
                    }
                }
            }

            {
                match &episode {
                    Some(episode) => rsx! {
                        div { class: "current-episode-thumbnail",
                            img {
                                src: "{episode.thumbnail}",
                                alt: "{episode.title}",
                                width: "592",
                                height: "592",
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-player",
                            strong { "Selecione um podcast" }
                        }
                    },
                }
            }

            footer { class: if episode.is_none() { "player-footer empty" } else { "player-footer" },
                div { class: "player-progress",
                    span { "{format_time_to_string(progress)}" }
                    div { class: "player-slider",
                        if can_seek {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{duration}",
                                value: "{progress}",
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "empty-slider" }
                        }
                    }
                    span { "{format_time_to_string(duration)}" }
                }

                div { class: "player-buttons",
                    ShuffleButton { player }
                    PrevButton { player }
                    PlayPauseButton { player }
                    NextButton { player }
                    RepeatButton { player }
                }
            }
        }
    }
}
