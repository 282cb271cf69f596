use api::NoticeLevel;
use dioxus::prelude::*;

/// Raised container using the theme's card defaults.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}

/// Thin progress bar. Without a value it animates indefinitely.
#[component]
pub fn Progress(value: Option<f64>, #[props(default)] class: String) -> Element {
    match value {
        Some(value) => {
            let width = value.clamp(0.0, 100.0);
            rsx! {
                div {
                    class: "progress {class}",
                    role: "progressbar",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                    "aria-valuenow": "{width}",
                    div { class: "progress-fill", style: "width: {width}%" }
                }
            }
        }
        None => rsx! {
            div {
                class: "progress progress-indeterminate {class}",
                role: "progressbar",
                div { class: "progress-fill" }
            }
        },
    }
}

#[component]
pub fn Alert(level: NoticeLevel, title: String, description: String) -> Element {
    rsx! {
        div {
            class: "alert alert-{level.as_str()}",
            role: "alert",
            span { class: "alert-icon", "!" }
            div {
                div { class: "alert-title", "{title}" }
                div { class: "alert-description", "{description}" }
            }
        }
    }
}
