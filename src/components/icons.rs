use dioxus::prelude::*;

/// Inline feather-style icons used by the player panel and episode views.
#[component]
pub fn Icon(name: &'static str, class: &'static str) -> Element {
    match name {
        "headphones" => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M3 18v-6a9 9 0 0 1 18 0v6" }
                path { d: "M21 19a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3zM3 19a2 2 0 0 0 2 2h1a2 2 0 0 0 2-2v-3a2 2 0 0 0-2-2H3z" }
            }
        },
        "mic" => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z" }
                path { d: "M19 10v2a7 7 0 0 1-14 0v-2" }
                line { x1: "12", y1: "19", x2: "12", y2: "23" }
                line { x1: "8", y1: "23", x2: "16", y2: "23" }
            }
        },
        "shuffle" => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "16 3 21 3 21 8" }
                line { x1: "4", y1: "20", x2: "21", y2: "3" }
                polyline { points: "21 16 21 21 16 21" }
                line { x1: "15", y1: "15", x2: "21", y2: "21" }
                line { x1: "4", y1: "4", x2: "9", y2: "9" }
            }
        },
        "play" => rsx! {
            svg { class, view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        "pause" => rsx! {
            svg { class, view_box: "0 0 24 24", fill: "currentColor",
                rect { x: "6", y: "4", width: "4", height: "16" }
                rect { x: "14", y: "4", width: "4", height: "16" }
            }
        },
        "prev" => rsx! {
            svg { class, view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line { x1: "5", y1: "19", x2: "5", y2: "5", stroke: "currentColor", stroke_width: "2" }
            }
        },
        "next" => rsx! {
            svg { class, view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line { x1: "19", y1: "5", x2: "19", y2: "19", stroke: "currentColor", stroke_width: "2" }
            }
        },
        "repeat" => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "17 1 21 5 17 9" }
                path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
                polyline { points: "7 23 3 19 7 15" }
                path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
            }
        },
        "arrow-left" => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line { x1: "19", y1: "12", x2: "5", y2: "12" }
                polyline { points: "12 19 5 12 12 5" }
            }
        },
        _ => rsx! {
            svg {
                class,
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    }
}
