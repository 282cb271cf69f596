//! Uploads that outlive the view that started them.
//!
//! [`Uploader::submit`] runs the upload on the root scope, so navigating away or
//! logging out while a file is in flight neither aborts the request nor loses
//! its notice. Views only read [`Uploader::state`].

use api::{submit_upload, CsvFile, EnhancementApi, HttpClient, UploadState, UploadTracker};
use dioxus::prelude::*;

use crate::session::{use_session, SessionSignal};
use crate::toast::{push_notice, use_toasts, Toasts};

#[derive(Clone)]
pub struct Uploader<A: 'static = HttpClient> {
    api: A,
    session: SessionSignal,
    toasts: Signal<Toasts>,
    state: Signal<UploadState>,
}

struct SignalTracker(Signal<UploadState>);

impl UploadTracker for SignalTracker {
    fn update(&mut self, f: impl FnOnce(&mut UploadState)) {
        f(&mut self.0.write());
    }
}

impl<A: EnhancementApi + Clone + 'static> Uploader<A> {
    pub fn state(&self) -> UploadState {
        self.state.read().clone()
    }

    /// Start uploading `file` with the token currently in storage.
    pub fn submit(&self, file: CsvFile) {
        if self.state.peek().processing {
            tracing::warn!(
                "Upload of {} ignored: another upload is in flight",
                file.name
            );
            return;
        }
        let api = self.api.clone();
        let session = self.session;
        let mut toasts = self.toasts;
        let state = self.state;

        spawn_forever(async move {
            let token = session.peek().stored_token();
            let notice = submit_upload(&api, token, file, &mut SignalTracker(state)).await;
            push_notice(&mut toasts, notice);
        });
    }

    pub fn remove_file(&self) {
        let mut state = self.state;
        state.write().remove_file();
    }
}

/// Create the uploader for `api` and provide it to the children.
/// Must be called below the toast and session providers.
pub fn use_uploader_provider<A: EnhancementApi + Clone + 'static>(api: A) -> Uploader<A> {
    let session = use_session();
    let toasts = use_toasts();
    let state = use_signal(UploadState::default);
    use_context_provider(move || Uploader {
        api,
        session,
        toasts,
        state,
    })
}

pub fn use_uploader<A: Clone + 'static>() -> Uploader<A> {
    use_context::<Uploader<A>>()
}
