use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: input_type,
            placeholder: "{placeholder}",
            required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
            if required {
                span { class: "label-required", " *" }
            }
        }
    }
}
