use serde::{Deserialize, Serialize};

/// Summary returned by `POST /api/upload`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadSummary {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_processed: Option<u64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

impl UploadSummary {
    /// One-line description shown in the success notification.
    pub fn describe(&self) -> String {
        let message = self.message.trim_end_matches('.');
        match self.total_processed {
            Some(count) => format!("{message}. Processed {count} companies."),
            None => format!("{message}."),
        }
    }
}

/// Error payload of any non-2xx response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_with_count() {
        let summary: UploadSummary = serde_json::from_str(
            r#"{"message": "File processed successfully", "total_processed": 42, "filename": "leads.csv"}"#,
        )
        .unwrap();
        assert_eq!(summary.filename.as_deref(), Some("leads.csv"));
        assert_eq!(
            summary.describe(),
            "File processed successfully. Processed 42 companies."
        );
    }

    #[test]
    fn test_describe_without_count() {
        let summary = UploadSummary {
            message: "Queued.".to_string(),
            ..Default::default()
        };
        assert_eq!(summary.describe(), "Queued.");
    }

    #[test]
    fn test_results_are_kept_verbatim() {
        let summary: UploadSummary = serde_json::from_str(
            r#"{"message": "ok", "total_processed": 1, "results": [{"Company": "Acme", "Website": "acme.com"}]}"#,
        )
        .unwrap();
        let results = summary.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["Company"], "Acme");
    }

    #[test]
    fn test_error_body_tolerates_extra_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Invalid token", "code": 401}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid token"));
    }
}
