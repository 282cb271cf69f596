//! Single-file CSV drop zone.
//!
//! The widget only selects and validates. The upload itself belongs to the
//! caller's `on_upload` handler, which is expected to hand the file off and
//! return; an error it returns is shown inline. Apart from that error and the
//! drag-hover flag all state belongs to the caller.

use std::sync::Arc;

use api::{select_csv, ApiError, CsvFile, SelectionError};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonSize, ButtonVariant, Progress};
use crate::icons::{FaFileCsv, FaUpload};
use crate::Icon;

const UPLOAD_CSS: Asset = asset!("/assets/styling/upload.css");
const INPUT_ID: &str = "csv-file-input";

/// Inline text when the handler's error carries no server message.
pub const UPLOAD_ERROR_FALLBACK: &str = "Error uploading file";

/// Text shown inline for an error returned by the upload handler.
pub fn upload_error_text(err: &ApiError) -> String {
    match err {
        ApiError::InvalidSelection(e) => e.to_string(),
        _ => err
            .server_message()
            .unwrap_or(UPLOAD_ERROR_FALLBACK)
            .to_string(),
    }
}

/// The widget's own state.
#[derive(Clone, Debug, Default, PartialEq)]
struct DropZone {
    dragging: bool,
    error: Option<String>,
    /// Key of the hidden file input. A fresh input per selection lets the
    /// picker report the same file twice in a row.
    picker_generation: u32,
}

impl DropZone {
    fn begin_selection(&mut self) {
        self.dragging = false;
        self.error = None;
        self.picker_generation = self.picker_generation.wrapping_add(1);
    }

    fn class(&self, processing: bool) -> String {
        let mut class = String::from("drop-zone");
        if self.dragging {
            class.push_str(" dragging");
        }
        if processing {
            class.push_str(" disabled");
        }
        class
    }
}

/// Read the single CSV out of a drop or picker selection.
async fn read_selection(engine: Arc<dyn FileEngine>) -> Result<Option<CsvFile>, SelectionError> {
    let names = engine.files();
    let Some(name) = select_csv(&names)? else {
        return Ok(None);
    };
    let bytes = engine
        .read_file(name)
        .await
        .ok_or_else(|| SelectionError::Unreadable(name.to_string()))?;
    Ok(Some(CsvFile::new(name, bytes)))
}

#[component]
pub fn FileUpload(
    on_upload: Callback<CsvFile, Result<(), ApiError>>,
    #[props(default)] is_processing: bool,
    #[props(default)] current_file: Option<String>,
    on_remove: Option<EventHandler<()>>,
) -> Element {
    let mut zone = use_signal(DropZone::default);

    let mut handle_files = move |engine: Option<Arc<dyn FileEngine>>| {
        zone.write().begin_selection();
        let Some(engine) = engine else {
            return;
        };
        spawn(async move {
            let file = match read_selection(engine).await {
                Ok(Some(file)) => file,
                Ok(None) => return,
                Err(e) => {
                    tracing::warn!("File rejected: {}", e);
                    zone.write().error = Some(e.to_string());
                    return;
                }
            };
            if let Err(e) = on_upload.call(file) {
                zone.write().error = Some(upload_error_text(&e));
            }
        });
    };

    let current = zone.read().clone();
    let prompt = if current.dragging {
        "Drop the CSV file here"
    } else {
        "Drag and drop a CSV file here, or click to select"
    };

    rsx! {
        document::Stylesheet { href: UPLOAD_CSS }

        div {
            class: "file-upload",

            label {
                class: current.class(is_processing),
                r#for: INPUT_ID,
                "aria-disabled": is_processing,
                ondragover: move |evt| {
                    evt.prevent_default();
                    if !is_processing {
                        zone.write().dragging = true;
                    }
                },
                ondragleave: move |_| zone.write().dragging = false,
                ondrop: move |evt| {
                    evt.prevent_default();
                    zone.write().dragging = false;
                    if !is_processing {
                        handle_files(evt.files());
                    }
                },

                for generation in std::iter::once(current.picker_generation) {
                    input {
                        key: "{generation}",
                        id: INPUT_ID,
                        class: "visually-hidden",
                        r#type: "file",
                        accept: ".csv",
                        multiple: false,
                        disabled: is_processing,
                        onchange: move |evt| handle_files(evt.files()),
                    }
                }

                div {
                    class: "drop-zone-icon",
                    Icon { icon: FaUpload, width: 32, height: 32 }
                }
                p { class: "drop-zone-prompt", "{prompt}" }
                span { class: "btn btn-outline btn-sm", "Select File" }
            }

            if let Some(name) = current_file {
                div {
                    class: "selected-file",
                    Icon { icon: FaFileCsv, width: 16, height: 16 }
                    span { class: "selected-file-name", "{name}" }
                    if let Some(handler) = on_remove {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            disabled: is_processing,
                            onclick: move |_| handler.call(()),
                            "Remove file"
                        }
                    }
                }
            }

            if is_processing {
                div {
                    class: "upload-progress",
                    p { class: "muted", "Processing..." }
                    Progress {}
                }
            }

            if let Some(message) = current.error.clone() {
                Alert {
                    level: api::NoticeLevel::Error,
                    title: "Upload Error",
                    description: message,
                }
            }
        }
    }
}
