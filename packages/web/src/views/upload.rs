use api::{ApiError, CsvFile};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{use_uploader, FileUpload, Uploader};

/// Authenticated view. Hands files to the app-wide [`Uploader`] and shows
/// its progress; the upload keeps running if this view goes away.
#[component]
pub fn UploadView(on_logout: EventHandler<()>) -> Element {
    let uploader: Uploader = use_uploader();
    let current = uploader.state();

    let submitter = uploader.clone();
    let on_upload = move |file: CsvFile| -> Result<(), ApiError> {
        submitter.submit(file);
        Ok(())
    };

    rsx! {
        div {
            class: "upload-page",
            div {
                class: "upload-header",
                div {
                    h1 { class: "page-title", "LeadGen Data Enhancement" }
                    p { class: "muted", "Upload your CSV file to enhance your data" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_logout.call(()),
                    "Logout"
                }
            }

            FileUpload {
                on_upload: on_upload,
                is_processing: current.processing,
                current_file: current.current_file,
                on_remove: move |_| uploader.remove_file(),
            }
        }
    }
}
