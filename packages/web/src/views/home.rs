//! Landing route: login until a token exists, the upload view after.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use super::UploadView;

#[component]
pub fn Home() -> Element {
    let mut session = use_session();

    if session.read().is_authenticated() {
        rsx! {
            UploadView {
                on_logout: move |_| session.write().sign_out(),
            }
        }
    } else {
        rsx! {
            LoginForm {
                on_success: move |token| session.write().sign_in(token),
            }
        }
    }
}
