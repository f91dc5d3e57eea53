use crate::components::{AppView, Icon};
use chrono::{Local, Locale, NaiveDate};
use dioxus::prelude::*;

/// Short pt-BR weekday and long month, e.g. `sex, 22 janeiro`.
pub fn format_header_date(date: NaiveDate) -> String {
    date.format_localized("%a, %-d %B", Locale::pt_BR).to_string()
}

#[component]
pub fn Header() -> Element {
    let current_date = format_header_date(Local::now().date_naive());

    rsx! {
        header { class: "header-container",
            Link { to: AppView::HomeView {}, class: "header-logo",
                Icon { name: "mic", class: "header-logo-icon" }
                span { "Podcastr" }
            }
            p { "O melhor para você ouvir, sempre" }
            span { class: "header-date", "{current_date}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_in_portuguese() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();
        let formatted = format_header_date(date);
        assert!(formatted.ends_with("22 janeiro"), "{formatted}");
    }
}
