use api::Settings;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{Navbar, SessionProvider, StoreProvider, ThemeProvider, ToastProvider};
use views::{Dashboard, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_hook(Settings::load);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "LeadGen Data Enhancement" }

        StoreProvider {
            ThemeProvider {
                storage_key: settings.storage.color_mode_key.clone(),
                ToastProvider {
                    SessionProvider {
                        settings: settings.clone(),
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Navbar above whichever page the route selects.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Home {}, "Upload" }
            span { "Tools" }
            span { "Settings" }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
