//! Durable client-side key-value storage.
//!
//! The client keeps exactly two things across page loads: the session token and
//! the preferred color mode. Both live behind [`KeyValueStore`] so the session
//! logic can run against [`MemoryStore`] in tests and natively, and against the
//! browser's `localStorage` ([`LocalStore`]) on the web.

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

/// Key under which the light/dark preference is stored.
pub const COLOR_MODE_KEY: &str = "color-mode";

/// Synchronous string key-value storage.
///
/// Writes are best effort: a failing backend degrades to "nothing stored"
/// rather than surfacing an error to the UI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The store backing the running client.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStore;

/// The store backing the running client.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;
