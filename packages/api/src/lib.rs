//! # API crate — backend access and session logic for the enhancement client
//!
//! Everything the client does that is not rendering lives here: the typed wire
//! models for the two backend endpoints, the HTTP client that talks to them, the
//! session object that owns the stored token, and the login/upload flows that turn
//! backend outcomes into user-facing notices. The `ui` and `web` crates only wire
//! these into components.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`EnhancementApi`] trait and its `reqwest` implementation [`HttpClient`] (`POST /api/login`, `POST /api/upload`) |
//! | [`error`] | [`ApiError`], the single error taxonomy, and the message precedence used for notices |
//! | [`flow`] | Login and upload flows, [`submit_upload`] and the [`UploadState`] bookkeeping for the in-flight file |
//! | [`models`] | Request/response bodies and [`SessionToken`] |
//! | [`notice`] | [`Notice`], the payload of a toast notification |
//! | [`selection`] | Client-side CSV selection rules and [`CsvFile`] |
//! | [`session`] | [`Session`], the token-backed authentication state |
//! | [`settings`] | [`Settings`] loaded through the `config` crate |

pub mod client;
pub mod error;
pub mod flow;
pub mod models;
pub mod notice;
pub mod selection;
pub mod session;
pub mod settings;

pub use client::{EnhancementApi, HttpClient, ProgressFn, UploadProgress};
pub use error::ApiError;
pub use flow::{login, submit_upload, upload, UploadState, UploadTracker};
pub use models::{LoginRequest, LoginSuccess, SessionToken, UploadSummary};
pub use notice::{Notice, NoticeLevel};
pub use selection::{select_csv, CsvFile, SelectionError};
pub use session::Session;
pub use settings::Settings;
