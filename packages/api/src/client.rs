//! # Backend client
//!
//! [`EnhancementApi`] is the only way the client talks to the backend. The flows in
//! [`crate::flow`] are written against the trait, so tests drive them with a fake
//! while the app uses [`HttpClient`].
//!
//! ## Endpoints
//!
//! | Call | Request | Success body | Timeout |
//! |------|---------|--------------|---------|
//! | `POST /api/login` | JSON [`LoginRequest`] | `{ token, email }` | [`ApiSettings::login_timeout`] (none by default) |
//! | `POST /api/upload` | multipart, part `file`, bearer token | [`UploadSummary`] | [`UPLOAD_TIMEOUT`] (300 s, not configurable) |
//!
//! Any non-2xx status becomes [`ApiError::Server`] carrying the payload's `error`
//! field when the body has one.
//!
//! ## Progress
//!
//! On native targets the file part is streamed in fixed-size chunks and each chunk
//! pulled by the transport is reported through the [`ProgressFn`]. The browser's
//! `fetch` does not expose upload progress, so on wasm the only report is the final
//! one once the server has answered.

use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{ErrorBody, LoginReply, LoginRequest, LoginSuccess, SessionToken, UploadSummary};
use crate::selection::{CsvFile, CSV_MIME};
use crate::settings::ApiSettings;

pub const LOGIN_PATH: &str = "/api/login";
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field name the backend reads the file from.
pub const FILE_FIELD: &str = "file";

/// Upload deadline. Fixed; only the login timeout is configurable.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Origin used natively when no base URL is configured.
const DEFAULT_ORIGIN: &str = "http://localhost:5000";

#[cfg(not(target_arch = "wasm32"))]
const PROGRESS_CHUNK_SIZE: usize = 64 * 1024;

/// Bytes handed to the transport so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

impl UploadProgress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            (self.sent as f64 / self.total as f64).min(1.0)
        }
    }

    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }
}

pub type ProgressFn = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// HTTP interactions with the enhancement backend.
pub trait EnhancementApi {
    fn login(
        &self,
        credentials: &LoginRequest,
    ) -> impl std::future::Future<Output = Result<LoginSuccess, ApiError>>;

    fn upload(
        &self,
        token: &SessionToken,
        file: CsvFile,
        progress: Option<ProgressFn>,
    ) -> impl std::future::Future<Output = Result<UploadSummary, ApiError>>;
}

/// `reqwest`-backed [`EnhancementApi`].
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    login_timeout: Option<Duration>,
}

impl HttpClient {
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: resolve_base_url(&settings.base_url),
            login_timeout: settings.login_timeout(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the login request without sending it.
    pub fn login_request(&self, credentials: &LoginRequest) -> Result<reqwest::Request, ApiError> {
        let builder = self.client.post(self.url(LOGIN_PATH)).json(credentials);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match self.login_timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        };
        builder.build().map_err(|e| transport_error(e, None))
    }

    /// Build the authenticated multipart upload request without sending it.
    pub fn upload_request(
        &self,
        token: &SessionToken,
        file: CsvFile,
        progress: Option<ProgressFn>,
    ) -> Result<reqwest::Request, ApiError> {
        let form = Form::new().part(FILE_FIELD, file_part(file, progress)?);
        let builder = self
            .client
            .post(self.url(UPLOAD_PATH))
            .bearer_auth(token.as_str())
            .multipart(form);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(UPLOAD_TIMEOUT);
        builder.build().map_err(|e| transport_error(e, None))
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
        limit: Option<Duration>,
    ) -> Result<T, ApiError> {
        let call = async {
            let response = self
                .client
                .execute(request)
                .await
                .map_err(|e| transport_error(e, limit))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| transport_error(e, limit))?;
            decode_reply(status, &body)
        };
        with_deadline(call, limit).await
    }
}

impl EnhancementApi for HttpClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginSuccess, ApiError> {
        tracing::info!("Attempting login for {}", credentials.email);
        let request = self.login_request(credentials)?;
        let reply: LoginReply = self.exchange(request, self.login_timeout).await?;
        reply.into_success(&credentials.email)
    }

    async fn upload(
        &self,
        token: &SessionToken,
        file: CsvFile,
        progress: Option<ProgressFn>,
    ) -> Result<UploadSummary, ApiError> {
        let total = file.len();
        tracing::info!("Uploading {} ({} bytes)", file.name, total);
        let request = self.upload_request(token, file, progress.clone())?;
        let summary = self.exchange(request, Some(UPLOAD_TIMEOUT)).await?;
        if cfg!(target_arch = "wasm32") {
            if let Some(report) = progress {
                report(UploadProgress { sent: total, total });
            }
        }
        Ok(summary)
    }
}

/// Interpret a response by status: 2xx bodies decode into `T`, anything else
/// becomes [`ApiError::Server`].
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        Err(ApiError::Server { status, message })
    }
}

fn transport_error(e: reqwest::Error, limit: Option<Duration>) -> ApiError {
    match limit {
        Some(limit) if e.is_timeout() => ApiError::Timeout(limit.as_secs()),
        _ => ApiError::Transport(e.to_string()),
    }
}

fn resolve_base_url(configured: &str) -> String {
    let trimmed = configured.trim().trim_end_matches('/');
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    page_origin().unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn file_part(file: CsvFile, progress: Option<ProgressFn>) -> Result<Part, ApiError> {
    let total = file.len();
    let stream = counted_chunks(file.bytes, progress);
    Part::stream_with_length(reqwest::Body::wrap_stream(stream), total)
        .file_name(file.name)
        .mime_str(CSV_MIME)
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Split `bytes` into chunks, reporting each one as the consumer pulls it.
#[cfg(not(target_arch = "wasm32"))]
fn counted_chunks(
    bytes: Vec<u8>,
    progress: Option<ProgressFn>,
) -> impl futures::Stream<Item = Result<Vec<u8>, std::io::Error>> {
    use futures::StreamExt;

    let total = bytes.len() as u64;
    let chunks: Vec<Vec<u8>> = bytes.chunks(PROGRESS_CHUNK_SIZE).map(<[u8]>::to_vec).collect();
    let mut sent = 0u64;
    futures::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(report) = &progress {
            report(UploadProgress { sent, total });
        }
        Ok::<_, std::io::Error>(chunk)
    })
}

#[cfg(target_arch = "wasm32")]
fn file_part(file: CsvFile, _progress: Option<ProgressFn>) -> Result<Part, ApiError> {
    Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(CSV_MIME)
        .map_err(|e| ApiError::Transport(e.to_string()))
}

// Natively the request builder already enforces the limit.
#[cfg(not(target_arch = "wasm32"))]
async fn with_deadline<T>(
    call: impl std::future::Future<Output = Result<T, ApiError>>,
    _limit: Option<Duration>,
) -> Result<T, ApiError> {
    call.await
}

#[cfg(target_arch = "wasm32")]
async fn with_deadline<T>(
    call: impl std::future::Future<Output = Result<T, ApiError>>,
    limit: Option<Duration>,
) -> Result<T, ApiError> {
    use futures::future::{select, Either};

    let Some(limit) = limit else {
        return call.await;
    };
    let call = std::pin::pin!(call);
    let timer = std::pin::pin!(gloo_timers::future::sleep(limit));
    match select(call, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(limit.as_secs())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

    use super::*;
    use crate::notice::Notice;

    fn client() -> HttpClient {
        HttpClient::new(&ApiSettings {
            base_url: "http://backend.test/".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(client().url(LOGIN_PATH), "http://backend.test/api/login");
        let local = HttpClient::new(&ApiSettings::default());
        assert_eq!(local.url(UPLOAD_PATH), "http://localhost:5000/api/upload");
    }

    #[test]
    fn test_upload_request_carries_bearer_token() {
        let token = SessionToken::new("abc123");
        let file = CsvFile::new("leads.csv", b"Company\nAcme\n".to_vec());
        let request = client().upload_request(&token, file, None).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "http://backend.test/api/upload");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc123");
        let content_type = request.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(request.timeout(), Some(&UPLOAD_TIMEOUT));
    }

    #[test]
    fn test_login_request_is_plain_json() {
        let request = client()
            .login_request(&LoginRequest::new("a@b.com", "x"))
            .unwrap();

        assert_eq!(request.url().as_str(), "http://backend.test/api/login");
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.timeout(), None);

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(sent, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn test_login_timeout_applies_when_configured() {
        let client = HttpClient::new(&ApiSettings {
            base_url: "http://backend.test".to_string(),
            login_timeout_secs: Some(15),
        });
        let request = client
            .login_request(&LoginRequest::new("a@b.com", "x"))
            .unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_secs(15)));
    }

    #[tokio::test]
    async fn test_progress_is_reported_per_chunk() {
        use futures::TryStreamExt;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress: ProgressFn = Arc::new(move |p: UploadProgress| {
            sink.lock().unwrap().push(p);
        });

        let bytes = vec![b'x'; PROGRESS_CHUNK_SIZE * 2 + 10];
        let total = bytes.len() as u64;
        let chunks: Vec<Vec<u8>> = counted_chunks(bytes, Some(progress))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(Vec::len).sum::<usize>() as u64, total);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].sent, PROGRESS_CHUNK_SIZE as u64);
        assert_eq!(seen.last().unwrap().sent, total);
        assert_eq!(seen.last().unwrap().percent(), 100);
        assert!(seen.windows(2).all(|w| w[0].sent < w[1].sent));
    }

    #[test]
    fn test_nothing_is_reported_before_the_body_is_pulled() {
        let calls = Arc::new(Mutex::new(0u32));
        let sink = calls.clone();
        let progress: ProgressFn = Arc::new(move |_: UploadProgress| *sink.lock().unwrap() += 1);

        let _request = client()
            .upload_request(
                &SessionToken::new("t"),
                CsvFile::new("leads.csv", b"Company\n".to_vec()),
                Some(progress),
            )
            .unwrap();
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_decode_success_body() {
        let summary: UploadSummary =
            decode_reply(200, r#"{"message": "done", "total_processed": 3}"#).unwrap();
        assert_eq!(summary.total_processed, Some(3));
    }

    #[test]
    fn test_decode_server_error_body() {
        let err = decode_reply::<UploadSummary>(
            500,
            r#"{"error": "enrichment service unavailable"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: Some("enrichment service unavailable".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_error_without_json() {
        let err = decode_reply::<UploadSummary>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: None,
            }
        );
    }

    #[test]
    fn test_decode_error_reads_only_error_field() {
        let err = decode_reply::<LoginReply>(401, r#"{"message": "Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err.server_message(), None);
        assert_eq!(Notice::login(&Err(err)).description, "An error occurred");
    }

    #[test]
    fn test_decode_garbage_success_body() {
        let err = decode_reply::<UploadSummary>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_progress_fraction() {
        let half = UploadProgress { sent: 50, total: 100 };
        assert_eq!(half.percent(), 50);
        let empty = UploadProgress { sent: 0, total: 0 };
        assert_eq!(empty.fraction(), 1.0);
    }
}
