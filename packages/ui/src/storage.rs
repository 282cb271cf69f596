//! The key-value store shared by everything that persists client state.

use dioxus::prelude::*;
use store::PlatformStore;

pub fn use_store() -> PlatformStore {
    use_context::<PlatformStore>()
}

/// Provides a single [`PlatformStore`] to its children. Mount it above
/// [`ThemeProvider`](crate::ThemeProvider) and
/// [`SessionProvider`](crate::SessionProvider).
#[component]
pub fn StoreProvider(children: Element) -> Element {
    use_context_provider(PlatformStore::new);

    rsx! {
        {children}
    }
}
