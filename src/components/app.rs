use crate::components::{view_label, AppView, Header, Player};
use crate::config::AppConfig;
use crate::playback::use_player_provider;
use dioxus::prelude::*;

/// Page shell: owns the session's player store and keeps the player panel
/// mounted across route changes.
#[component]
pub fn AppShell() -> Element {
    let config = use_hook(AppConfig::load);
    use_context_provider(|| config);

    let player = use_player_provider();
    let view = use_route::<AppView>();

    rsx! {
        document::Title { "{view_label(&view)} | Podcastr" }
        div { class: "app-wrapper",
            main { class: "app-main",
                Header {}
                div { class: "page-shell", Outlet::<AppView> {} }
            }

            Player { player }
        }
    }
}
