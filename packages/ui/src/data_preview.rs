use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, Progress};

/// Value of `column` in `row`, empty when the row lacks it.
pub fn cell<'a>(row: &'a HashMap<String, String>, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or_default()
}

pub fn progress_label(progress: f64) -> String {
    format!("Enhancing data... {}%", progress.clamp(0.0, 100.0).round() as u8)
}

/// Table of parsed rows with enhance and download actions.
#[component]
pub fn DataPreview(
    data: Vec<HashMap<String, String>>,
    columns: Vec<String>,
    #[props(default)] is_enhancing: bool,
    #[props(default)] progress: f64,
    on_enhance: EventHandler<()>,
    on_download: EventHandler<()>,
) -> Element {
    rsx! {
        Card {
            class: "data-preview",
            div {
                class: "data-preview-actions",
                Button {
                    loading: is_enhancing,
                    onclick: move |_| on_enhance.call(()),
                    "Enhance Data"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: is_enhancing,
                    onclick: move |_| on_download.call(()),
                    "Download CSV"
                }
            }

            if is_enhancing {
                div {
                    class: "data-preview-progress",
                    p { class: "muted", "{progress_label(progress)}" }
                    Progress { value: progress }
                }
            }

            div {
                class: "table-scroll",
                table {
                    class: "table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (index, row) in data.iter().enumerate() {
                            tr {
                                key: "{index}",
                                for column in columns.iter() {
                                    td { key: "{column}", "{cell(row, column)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_render_empty() {
        let row = HashMap::from([("company".to_string(), "Acme".to_string())]);
        assert_eq!(cell(&row, "company"), "Acme");
        assert_eq!(cell(&row, "website"), "");
    }

    #[test]
    fn test_progress_label_rounds() {
        assert_eq!(progress_label(0.0), "Enhancing data... 0%");
        assert_eq!(progress_label(42.4), "Enhancing data... 42%");
        assert_eq!(progress_label(42.5), "Enhancing data... 43%");
        assert_eq!(progress_label(100.0), "Enhancing data... 100%");
    }
}
