use crate::api::{load_catalog, Episode, EpisodeCatalog};
use crate::components::{AppView, Icon};
use crate::config::AppConfig;
use crate::playback::{use_player, PlayerStore};
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let config = use_context::<AppConfig>();
    let player = use_player();

    let catalog = use_resource(move || {
        let config = config.clone();
        async move { load_catalog(&config).await.map_err(|e| e.to_string()) }
    });

    match catalog() {
        None => rsx! {
            div { class: "home-container",
                p { class: "page-status", "Carregando episódios..." }
            }
        },
        Some(Err(message)) => rsx! {
            div { class: "home-container",
                p { class: "page-status page-status--error", "Não foi possível carregar os episódios: {message}" }
            }
        },
        Some(Ok(catalog)) => rsx! {
            EpisodeCatalogView { catalog, player }
        },
    }
}

#[component]
fn EpisodeCatalogView(catalog: EpisodeCatalog, player: PlayerStore) -> Element {
    // Both sections play from the same combined list so next/previous cross between them.
    let playlist = catalog.playlist();

    rsx! {
        div { class: "home-container",
            section { class: "latest-episodes",
                h2 { "Últimos lançamentos" }
                ul {
                    for (index , episode) in catalog.latest.iter().enumerate() {
                        LatestEpisodeItem {
                            key: "{episode.id}",
                            episode: episode.clone(),
                            playlist: playlist.clone(),
                            play_index: index,
                            player,
                        }
                    }
                }
            }

            section { class: "all-episodes",
                h2 { "Todos episódios" }
                table {
                    thead {
                        tr {
                            th {}
                            th { "Podcast" }
                            th { "Integrantes" }
                            th { "Data" }
                            th { "Duração" }
                            th {}
                        }
                    }
                    tbody {
                        for (row , episode) in catalog.all.iter().enumerate() {
                            EpisodeRow {
                                key: "{episode.id}",
                                episode: episode.clone(),
                                playlist: playlist.clone(),
                                play_index: catalog.table_play_index(row),
                                player,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LatestEpisodeItem(
    episode: Episode,
    playlist: Vec<Episode>,
    play_index: usize,
    player: PlayerStore,
) -> Element {
    let mut player = player;

    rsx! {
        li {
            img {
                src: "{episode.thumbnail}",
                alt: "{episode.title}",
                width: "192",
                height: "192",
                loading: "lazy",
            }
            div { class: "episode-details",
                Link { to: AppView::EpisodeView { id: episode.id.clone() }, "{episode.title}" }
                p { "{episode.members}" }
                span { "{episode.published_at}" }
                span { "{episode.duration_as_string}" }
            }
            button {
                r#type: "button",
                class: "play-episode-button",
                aria_label: "Tocar episódio",
                onclick: move |_| player.play_list(playlist.clone(), play_index),
                Icon { name: "play", class: "play-episode-icon" }
            }
        }
    }
}

#[component]
fn EpisodeRow(
    episode: Episode,
    playlist: Vec<Episode>,
    play_index: usize,
    player: PlayerStore,
) -> Element {
    let mut player = player;

    rsx! {
        tr {
            td { style: "width: 72px",
                img {
                    src: "{episode.thumbnail}",
                    alt: "{episode.title}",
                    width: "120",
                    height: "120",
                    loading: "lazy",
                }
            }
            td {
                Link { to: AppView::EpisodeView { id: episode.id.clone() }, "{episode.title}" }
            }
            td { "{episode.members}" }
            td { style: "width: 110px", "{episode.published_at}" }
            td { "{episode.duration_as_string}" }
            td {
                button {
                    r#type: "button",
                    class: "play-episode-button",
                    aria_label: "Tocar episódio",
                    onclick: move |_| player.play_list(playlist.clone(), play_index),
                    Icon { name: "play", class: "play-episode-icon" }
                }
            }
        }
    }
}
