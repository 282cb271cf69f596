use api::{LoginRequest, Notice, SessionToken};
use dioxus::prelude::*;

use crate::components::{Button, Card, Input, Label};
use crate::session::use_api;
use crate::toast::{push_notice, use_toasts};

/// Credential form. Calls the login endpoint and hands the issued token to
/// `on_success`.
#[component]
pub fn LoginForm(on_success: EventHandler<SessionToken>) -> Element {
    let api = use_api();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let credentials = LoginRequest::new(email(), password());
        spawn(async move {
            loading.set(true);
            let result = api::login(&api, credentials).await;
            push_notice(&mut toasts, Notice::login(&result));
            // Reset before the callback, which may unmount this form.
            loading.set(false);
            if let Ok(success) = result {
                on_success.call(success.token);
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            Card {
                class: "login-card",
                div {
                    class: "login-header",
                    h1 { "LeadGen Login" }
                    p { class: "muted", "Please login to access the application" }
                }

                form {
                    class: "login-form",
                    onsubmit: onsubmit,

                    div {
                        class: "form-field",
                        Label { html_for: "email", required: true, "Email" }
                        Input {
                            id: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "password", required: true, "Password" }
                        Input {
                            id: "password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }

                    Button {
                        button_type: "submit",
                        class: "full-width",
                        loading: loading(),
                        "Login"
                    }
                }
            }
        }
    }
}
