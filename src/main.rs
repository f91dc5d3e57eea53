use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod playback;
mod utils;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Podcastr" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
