//! Session context and hooks for the UI.

use api::{HttpClient, Session, Settings};
use dioxus::prelude::*;
use store::PlatformStore;

use crate::storage::use_store;
use crate::uploader::use_uploader_provider;

pub type SessionSignal = Signal<Session<PlatformStore>>;

/// Current session. Updates when the user logs in or out.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// HTTP client configured from [`Settings`].
pub fn use_api() -> HttpClient {
    use_context::<HttpClient>()
}

/// Provider component that restores the session from storage on mount and
/// owns the [`Uploader`](crate::Uploader). Must sit below the store and toast
/// providers.
#[component]
pub fn SessionProvider(settings: Settings, children: Element) -> Element {
    let store = use_store();
    let api = use_context_provider(|| HttpClient::new(&settings.api));

    let token_key = settings.storage.token_key.clone();
    use_context_provider(move || {
        let session = Session::restore(store, token_key);
        tracing::info!(
            "Session restored (authenticated: {})",
            session.is_authenticated()
        );
        Signal::new(session)
    });
    use_uploader_provider(api);

    rsx! {
        {children}
    }
}
