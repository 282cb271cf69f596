use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ui::Dashboard {}
    }
}
