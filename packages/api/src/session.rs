//! Session state derived from the stored token.
//!
//! The authentication flag is never tracked separately: it is whatever the store
//! said at the last of the three checkpoints, [`Session::restore`] on mount,
//! [`Session::sign_in`] after login and [`Session::sign_out`] on logout. Changes
//! made to the store behind the session's back are only picked up by
//! [`Session::refresh`].

use store::KeyValueStore;

use crate::models::SessionToken;

#[derive(Debug, Clone)]
pub struct Session<S: KeyValueStore> {
    store: S,
    token_key: String,
    token: Option<SessionToken>,
}

impl<S: KeyValueStore> Session<S> {
    /// Read the stored token, if any.
    pub fn restore(store: S, token_key: impl Into<String>) -> Self {
        let mut session = Self {
            store,
            token_key: token_key.into(),
            token: None,
        };
        session.refresh();
        session
    }

    pub fn refresh(&mut self) {
        self.token = self.stored_token();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The token as the store holds it right now.
    pub fn stored_token(&self) -> Option<SessionToken> {
        self.store
            .get(&self.token_key)
            .filter(|t| !t.is_empty())
            .map(SessionToken::new)
    }

    /// Persist a freshly issued token and mark the session authenticated.
    pub fn sign_in(&mut self, token: SessionToken) {
        self.store.set(&self.token_key, token.as_str());
        self.refresh();
        tracing::info!("Session started");
    }

    /// Forget the token locally. The backend is not told.
    pub fn sign_out(&mut self) {
        self.store.remove(&self.token_key);
        self.refresh();
        tracing::info!("Session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, TOKEN_KEY};

    #[test]
    fn test_restore_without_token() {
        let session = Session::restore(MemoryStore::new(), TOKEN_KEY);
        assert!(!session.is_authenticated());
        assert!(session.stored_token().is_none());
    }

    #[test]
    fn test_restore_with_token() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "abc123");
        let session = Session::restore(store, TOKEN_KEY);
        assert!(session.is_authenticated());
        assert_eq!(session.stored_token(), Some(SessionToken::new("abc123")));
    }

    #[test]
    fn test_empty_stored_token_is_unauthenticated() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "");
        assert!(!Session::restore(store, TOKEN_KEY).is_authenticated());
    }

    #[test]
    fn test_sign_in_persists_token() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone(), TOKEN_KEY);

        session.sign_in(SessionToken::new("abc123"));
        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_sign_out_removes_token() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "abc123");
        let mut session = Session::restore(store.clone(), TOKEN_KEY);

        session.sign_out();
        assert!(!session.is_authenticated());
        assert!(store.get(TOKEN_KEY).is_none());

        // Signing out twice is harmless.
        session.sign_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_external_changes_need_refresh() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone(), TOKEN_KEY);

        store.set(TOKEN_KEY, "from-elsewhere");
        assert!(!session.is_authenticated());
        assert!(session.stored_token().is_some());

        session.refresh();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_custom_token_key() {
        let store = MemoryStore::with_entry("leadgen-token", "t");
        let session = Session::restore(store.clone(), "leadgen-token");
        assert!(session.is_authenticated());
        assert!(!Session::restore(store, TOKEN_KEY).is_authenticated());
    }
}
