//! Routes of the application.

use crate::components::views::{EpisodeView, HomeView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/episodes/:id")]
        EpisodeView { id: String },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Home",
        AppView::EpisodeView { .. } => "Episódio",
    }
}
