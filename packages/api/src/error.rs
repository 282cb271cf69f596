//! Error taxonomy shared by every backend interaction.
//!
//! Three families of failure reach the user:
//!
//! - client-side rejections ([`ApiError::MissingToken`], [`ApiError::InvalidSelection`])
//!   where no request is made at all,
//! - transport failures ([`ApiError::Transport`], [`ApiError::Timeout`]),
//! - server-reported failures ([`ApiError::Server`]) whose payload `error` field takes
//!   precedence over anything the transport says.
//!
//! None of them is fatal; every variant is `Clone` so it can sit in a UI signal.

use thiserror::Error;

use crate::selection::SelectionError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Authentication token not found. Please log in again.")]
    MissingToken,

    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),

    #[error("{0}")]
    Transport(String),

    #[error("timeout of {0}s exceeded")]
    Timeout(u64),

    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Login response did not include a session token")]
    NoTokenIssued,
}

impl ApiError {
    /// The `error` string the server put in its response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text for a notification: server message, then this error's own
    /// message, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            fallback.to_string()
        } else {
            own
        }
    }
}
