use crate::api::load_episode;
use crate::components::{AppView, Icon};
use crate::config::AppConfig;
use crate::playback::use_player;
use dioxus::prelude::*;

#[component]
pub fn EpisodeView(id: String) -> Element {
    let config = use_context::<AppConfig>();
    let mut player = use_player();

    let episode = use_resource(use_reactive!(|(id,)| {
        let config = config.clone();
        async move { load_episode(&config, &id).await.map_err(|e| e.to_string()) }
    }));

    let content = match episode() {
        None => rsx! {
            p { class: "page-status", "Carregando episódio..." }
        },
        Some(Err(message)) => rsx! {
            p { class: "page-status page-status--error", "Episódio indisponível: {message}" }
        },
        Some(Ok(episode)) => {
            let to_play = episode.clone();
            rsx! {
                div { class: "episode-thumbnail",
                    Link { to: AppView::HomeView {}, class: "episode-back",
                        Icon { name: "arrow-left", class: "episode-back-icon" }
                    }
                    img {
                        src: "{episode.thumbnail}",
                        alt: "{episode.title}",
                        width: "700",
                        height: "160",
                    }
                    button {
                        r#type: "button",
                        class: "episode-play",
                        aria_label: "Tocar episódio",
                        onclick: move |_| player.play(to_play.clone()),
                        Icon { name: "play", class: "episode-play-icon" }
                    }
                }
                header {
                    h1 { "{episode.title}" }
                    span { "{episode.members}" }
                    span { "{episode.published_at}" }
                    span { "{episode.duration_as_string}" }
                }
                div { class: "episode-description", dangerous_inner_html: "{episode.description}" }
            }
        }
    };

    rsx! {
        div { class: "episode-container", {content} }
    }
}
