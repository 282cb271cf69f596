//! Login and upload flows.
//!
//! Both flows are plain async functions over an [`EnhancementApi`] so the UI only
//! has to hold the signals. [`submit_upload`] is the whole upload as the root runs
//! it; UI state is only touched through [`UploadTracker::update`], never borrowed
//! across an await point.

use crate::client::{EnhancementApi, ProgressFn, UploadProgress};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginSuccess, SessionToken, UploadSummary};
use crate::notice::Notice;
use crate::selection::CsvFile;

/// Submit credentials.
pub async fn login<A: EnhancementApi>(
    api: &A,
    credentials: LoginRequest,
) -> Result<LoginSuccess, ApiError> {
    let result = api.login(&credentials).await;
    match &result {
        Ok(success) => tracing::info!("Logged in as {}", success.email),
        Err(e) => tracing::warn!("Login failed: {}", e),
    }
    result
}

/// Upload `file` with the stored token.
///
/// Without a token the call fails with [`ApiError::MissingToken`] before anything
/// is sent.
pub async fn upload<A: EnhancementApi>(
    api: &A,
    token: Option<SessionToken>,
    file: CsvFile,
    progress: Option<ProgressFn>,
) -> Result<UploadSummary, ApiError> {
    let Some(token) = token else {
        tracing::warn!("Upload of {} refused: no session token", file.name);
        return Err(ApiError::MissingToken);
    };
    let name = file.name.clone();
    let result = api.upload(&token, file, progress).await;
    match &result {
        Ok(summary) => tracing::info!(
            "Upload of {} finished: {} record(s) processed",
            name,
            summary.total_processed.unwrap_or_default()
        ),
        Err(e) => tracing::error!("Upload of {} failed: {}", name, e),
    }
    result
}

/// Progress callback that logs percentages at debug level.
pub fn log_progress(file_name: &str) -> ProgressFn {
    let name = file_name.to_string();
    std::sync::Arc::new(move |p: UploadProgress| {
        tracing::debug!("Upload progress for {}: {}%", name, p.percent());
    })
}

/// Upload `file` end to end: mark it in flight, send it, settle the bookkeeping
/// and return the notice to show.
///
/// Failures are reported through the notice only; the caller never sees an
/// error and the tracker is back to idle whatever happened.
pub async fn submit_upload<A: EnhancementApi, T: UploadTracker>(
    api: &A,
    token: Option<SessionToken>,
    file: CsvFile,
    tracker: &mut T,
) -> Notice {
    tracker.update(|state| state.start(&file));
    let progress = log_progress(&file.name);
    let result = upload(api, token, file, Some(progress)).await;
    tracker.update(UploadState::settle);
    Notice::upload(&result)
}

/// Where the upload bookkeeping lives: a plain [`UploadState`], or a UI signal
/// wrapping one.
pub trait UploadTracker {
    fn update(&mut self, f: impl FnOnce(&mut UploadState));
}

impl UploadTracker for UploadState {
    fn update(&mut self, f: impl FnOnce(&mut UploadState)) {
        f(self)
    }
}

/// The root's bookkeeping for the file currently being uploaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub processing: bool,
    pub current_file: Option<String>,
}

impl UploadState {
    pub fn start(&mut self, file: &CsvFile) {
        self.processing = true;
        self.current_file = Some(file.name.clone());
    }

    /// Reset after the upload resolved, whatever the outcome.
    pub fn settle(&mut self) {
        self.processing = false;
        self.current_file = None;
    }

    /// Drop the selection without touching the processing flag.
    pub fn remove_file(&mut self) {
        self.current_file = None;
    }
}
