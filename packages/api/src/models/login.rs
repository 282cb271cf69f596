//! # Login models
//!
//! `POST /api/login` takes a [`LoginRequest`] and answers with a JSON object that
//! carries `token` and `email` on success. The raw shape is decoded into
//! [`LoginReply`], where every field is optional, and then narrowed into a
//! [`LoginSuccess`] so the rest of the client never inspects optional fields.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Opaque credential issued by the backend and presented as a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response body as the server sends it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoginReply {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A login that produced a usable token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub token: SessionToken,
    pub email: String,
}

impl LoginReply {
    /// Narrow the reply, falling back to the submitted email when the server
    /// does not echo it.
    pub fn into_success(self, submitted_email: &str) -> Result<LoginSuccess, ApiError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::NoTokenIssued)?;
        Ok(LoginSuccess {
            token: SessionToken::new(token),
            email: self.email.unwrap_or_else(|| submitted_email.to_string()),
        })
    }
}
