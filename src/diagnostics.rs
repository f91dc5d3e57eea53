use dioxus::logger::tracing::debug;
use std::time::Duration;

#[inline]
pub fn log_perf(scope: &str, elapsed: Duration, details: &str) {
    let elapsed_ms = elapsed.as_millis();
    if details.trim().is_empty() {
        debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
