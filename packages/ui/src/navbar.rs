use dioxus::prelude::*;

use crate::components::IconButton;
use crate::icons::{FaBars, FaMoon, FaSun, FaXmark};
use crate::storage::use_store;
use crate::theme::{toggle_color_mode, use_color_mode, ColorMode, ColorModeKey};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Branding header. `children` are the navigation links; on narrow screens
/// they collapse behind a menu button.
#[component]
pub fn Navbar(children: Element) -> Element {
    let mut menu_open = use_signal(|| false);
    let mut mode = use_color_mode();
    let ColorModeKey(key) = use_context::<ColorModeKey>();
    let store = use_store();

    let (menu_class, menu_label) = if menu_open() {
        ("navbar-links open", "Close Navigation")
    } else {
        ("navbar-links", "Open Navigation")
    };

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                IconButton {
                    class: "navbar-menu-toggle",
                    label: menu_label,
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                }

                span { class: "navbar-brand", "LeadGen" }

                div {
                    class: menu_class,
                    onclick: move |_| menu_open.set(false),
                    {children}
                }

                IconButton {
                    class: "navbar-color-toggle",
                    label: "Toggle color mode",
                    onclick: move |_| toggle_color_mode(&mut mode, &store, &key),
                    if mode() == ColorMode::Light {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
