//! Toast payloads produced by the login and upload flows.

use std::time::Duration;

use crate::error::ApiError;
use crate::models::{LoginSuccess, UploadSummary};

/// Generic text when a login failure carries no server message.
pub const LOGIN_FALLBACK: &str = "An error occurred";

/// Generic text when an upload failure carries no usable message.
pub const UPLOAD_FALLBACK: &str = "An error occurred while uploading the file";

const LOGIN_DURATION: Duration = Duration::from_secs(3);
const UPLOAD_SUCCESS_DURATION: Duration = Duration::from_secs(5);
const UPLOAD_ERROR_DURATION: Duration = Duration::from_secs(8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notice {
    pub fn new(
        level: NoticeLevel,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
            duration,
        }
    }

    pub fn login(result: &Result<LoginSuccess, ApiError>) -> Self {
        match result {
            Ok(success) => Self::new(
                NoticeLevel::Success,
                "Login Successful",
                format!("Welcome back, {}!", success.email),
                LOGIN_DURATION,
            ),
            Err(ApiError::NoTokenIssued) => Self::new(
                NoticeLevel::Error,
                "Login Failed",
                ApiError::NoTokenIssued.to_string(),
                LOGIN_DURATION,
            ),
            Err(err) => Self::new(
                NoticeLevel::Error,
                "Login Failed",
                err.server_message().unwrap_or(LOGIN_FALLBACK),
                LOGIN_DURATION,
            ),
        }
    }

    pub fn upload(result: &Result<UploadSummary, ApiError>) -> Self {
        match result {
            Ok(summary) => Self::new(
                NoticeLevel::Success,
                "Success",
                summary.describe(),
                UPLOAD_SUCCESS_DURATION,
            ),
            Err(err) => Self::new(
                NoticeLevel::Error,
                "Error",
                err.user_message(UPLOAD_FALLBACK),
                UPLOAD_ERROR_DURATION,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionToken;

    #[test]
    fn test_login_success_mentions_email() {
        let result = Ok(LoginSuccess {
            token: SessionToken::new("abc123"),
            email: "a@b.com".to_string(),
        });
        let notice = Notice::login(&result);
        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(notice.description.contains("a@b.com"));
        assert_eq!(notice.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_login_failure_ignores_transport_text() {
        let result = Err(ApiError::Transport("connection refused".to_string()));
        let notice = Notice::login(&result);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.description, LOGIN_FALLBACK);

        let result = Err(ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        });
        assert_eq!(Notice::login(&result).description, "Invalid credentials");
    }

    #[test]
    fn test_upload_error_uses_server_text() {
        let result = Err(ApiError::Server {
            status: 500,
            message: Some("enrichment service unavailable".to_string()),
        });
        let notice = Notice::upload(&result);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.description, "enrichment service unavailable");
        assert_eq!(notice.duration, Duration::from_secs(8));
    }

    #[test]
    fn test_upload_success_describes_summary() {
        let result = Ok(UploadSummary {
            message: "File processed successfully".to_string(),
            total_processed: Some(7),
            ..Default::default()
        });
        let notice = Notice::upload(&result);
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(
            notice.description,
            "File processed successfully. Processed 7 companies."
        );
    }
}
