// Native webview backend: the <audio> element lives in the webview and is driven
// through `document::eval`. Its events are queued in JS and drained by a poll loop.
use super::EventSink;
use crate::playback::{MediaElement, MediaEvent};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::Deserialize;
use std::cell::Cell;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

const BRIDGE_BOOTSTRAP_JS: &str = r#"(function () {
    if (window.__podcastrAudio) return true;
    const names = ["loadedmetadata", "timeupdate", "ended", "play", "pause"];
    const bridge = {
        element: null,
        events: [],
        ensure() {
            if (this.element) return this.element;
            const audio = document.createElement("audio");
            audio.id = "podcastr-audio";
            audio.autoplay = true;
            audio.preload = "metadata";
            // Rewind here so a late poll cannot seek back over audio already heard.
            audio.addEventListener("loadedmetadata", () => { audio.currentTime = 0; });
            for (const name of names) {
                audio.addEventListener(name, () => bridge.events.push(name));
            }
            document.body.appendChild(audio);
            this.element = audio;
            return audio;
        },
        drain() {
            const audio = this.element;
            const events = this.events;
            this.events = [];
            const time = audio && Number.isFinite(audio.currentTime) ? audio.currentTime : 0;
            return { present: !!audio, current_time: time, events };
        },
    };
    window.__podcastrAudio = bridge;
    return true;
})();"#;

thread_local! {
    static PRESENT: Cell<bool> = const { Cell::new(false) };
    static LAST_TIME: Cell<f64> = const { Cell::new(0.0) };
}

#[derive(Debug, Deserialize)]
struct BridgeSnapshot {
    present: bool,
    current_time: f64,
    #[serde(default)]
    events: Vec<String>,
}

fn bridge_command(body: &str) {
    let script = format!(
        r#"{BRIDGE_BOOTSTRAP_JS}
        (function () {{
            const audio = window.__podcastrAudio.ensure();
            {body}
        }})();"#
    );
    let _ = document::eval(&script);
}

/// Handle on the webview element. Reads come from the last polled snapshot.
pub(crate) struct AudioElement {
    time: Cell<f64>,
}

impl AudioElement {
    fn snapshot_handle() -> Self {
        Self {
            time: Cell::new(LAST_TIME.with(Cell::get)),
        }
    }

    pub(crate) fn existing() -> Option<Self> {
        PRESENT.with(Cell::get).then(Self::snapshot_handle)
    }

    pub(crate) fn ensure(_sink: EventSink) -> Option<Self> {
        if !PRESENT.with(Cell::get) {
            bridge_command("");
            PRESENT.with(|p| p.set(true));
            LAST_TIME.with(|t| t.set(0.0));
        }
        Some(Self::snapshot_handle())
    }
}

impl MediaElement for AudioElement {
    fn set_source(&self, url: &str) {
        let url = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
        bridge_command(&format!("audio.src = {url};"));
    }

    fn clear_source(&self) {
        bridge_command(r#"audio.removeAttribute("src"); audio.load();"#);
    }

    fn play(&self) {
        bridge_command("audio.play().catch(() => {});");
    }

    fn pause(&self) {
        bridge_command("audio.pause();");
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds);
        LAST_TIME.with(|t| t.set(seconds));
        bridge_command(&format!("audio.currentTime = {};", seconds.max(0.0)));
    }

    fn set_looping(&self, looping: bool) {
        bridge_command(&format!("audio.loop = {looping};"));
    }

    /// The webview listener already rewound the element.
    fn rewind_to_start(&self) {
        self.time.set(0.0);
        LAST_TIME.with(|t| t.set(0.0));
    }
}

async fn drain_snapshot() -> Option<BridgeSnapshot> {
    let script = format!(
        "{BRIDGE_BOOTSTRAP_JS}\nreturn window.__podcastrAudio.drain();"
    );
    match document::eval(&script).join::<BridgeSnapshot>().await {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!("Audio bridge snapshot failed: {err:?}");
            None
        }
    }
}

/// Poll the webview for queued element events while an element exists.
pub(crate) fn use_event_source(sink: EventSink) {
    use_future(move || async move {
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            if !PRESENT.with(Cell::get) {
                continue;
            }
            let Some(snapshot) = drain_snapshot().await else {
                continue;
            };
            if !snapshot.present {
                continue;
            }
            LAST_TIME.with(|t| t.set(snapshot.current_time));
            for name in snapshot.events {
                if let Some(event) = MediaEvent::from_dom_name(&name) {
                    sink.dispatch(event, &AudioElement::snapshot_handle());
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_rewind_stays_local() {
        LAST_TIME.with(|t| t.set(0.6));
        let media = AudioElement::snapshot_handle();
        assert_eq!(media.current_time(), 0.6);

        // No eval runtime exists here, so reaching the webview would panic.
        media.rewind_to_start();

        assert_eq!(media.current_time(), 0.0);
        assert_eq!(LAST_TIME.with(Cell::get), 0.0);
    }

    #[test]
    fn webview_rewinds_on_loadedmetadata() {
        assert!(BRIDGE_BOOTSTRAP_JS
            .contains(r#"addEventListener("loadedmetadata", () => { audio.currentTime = 0; })"#));
        for event in crate::playback::binding::MEDIA_EVENTS {
            assert!(BRIDGE_BOOTSTRAP_JS.contains(&format!("\"{}\"", event.dom_name())));
        }
    }
}
