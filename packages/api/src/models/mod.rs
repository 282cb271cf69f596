//! Wire models for the backend endpoints.

mod login;
mod upload;

pub use login::{LoginReply, LoginRequest, LoginSuccess, SessionToken};
pub use upload::{ErrorBody, UploadSummary};
