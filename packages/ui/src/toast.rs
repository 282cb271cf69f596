//! Transient notifications.
//!
//! Flows produce [`Notice`]s, [`push_notice`] queues them, and [`ToastViewport`]
//! renders the queue in a corner of the screen. Each toast dismisses itself
//! after its notice's duration or when closed.

use std::time::Duration;

use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_notice(toasts: &mut Signal<Toasts>, notice: Notice) {
    toasts.write().push(notice);
}

/// Provides the toast queue and renders it above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
pub fn ToastViewport() -> Element {
    let toasts = use_toasts();
    let items = toasts().items.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-viewport",
            "aria-live": "polite",
            for toast in items {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;
    let duration = toast.notice.duration;

    use_future(move || async move {
        sleep(duration).await;
        toasts.write().dismiss(id);
    });

    let class = match toast.notice.level {
        NoticeLevel::Error => "toast error",
        NoticeLevel::Warning => "toast warning",
        NoticeLevel::Success => "toast success",
        NoticeLevel::Info => "toast info",
    };

    rsx! {
        div {
            class: class,
            role: "status",
            div {
                class: "toast-body",
                div { class: "toast-title", "{toast.notice.title}" }
                div { class: "toast-description", "{toast.notice.description}" }
            }
            button {
                class: "toast-close",
                "aria-label": "Close",
                onclick: move |_| toasts.write().dismiss(id),
                "\u{00D7}"
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
