use std::cell::RefCell;
use std::collections::HashMap;

use shared_types::AdminUser;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "admin_token";
/// Storage key for the JSON-encoded [`AdminUser`].
pub const USER_KEY: &str = "admin_user";

/// Synchronous key/value storage holding the session between reloads.
///
/// The browser implementation lives in the app; tests use [`MemoryStore`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The signed-in administrator and their bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AdminUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: AdminUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Read a session back from storage.
    ///
    /// Only a non-empty token together with a decodable user record counts.
    /// A half-written or corrupt record is removed.
    pub fn restore(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let user = store.get(USER_KEY);
        let (Some(token), Some(user)) = (token, user) else {
            return None;
        };
        match serde_json::from_str::<AdminUser>(&user) {
            Ok(user) => Some(Self { token, user }),
            Err(e) => {
                tracing::warn!(error = %e, "Stored admin user is corrupt, clearing session");
                Self::clear(store);
                None
            }
        }
    }

    /// Write the token and user record to storage.
    pub fn persist(&self, store: &impl SessionStore) {
        match serde_json::to_string(&self.user) {
            Ok(user) => {
                store.set(TOKEN_KEY, &self.token);
                store.set(USER_KEY, &user);
            }
            Err(e) => tracing::warn!(error = %e, "Could not encode admin user for storage"),
        }
    }

    /// Remove both session keys.
    pub fn clear(store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::UserRole;

    fn admin() -> AdminUser {
        AdminUser {
            id: "1".into(),
            name: "Rina Admin".into(),
            email: "rina@example.com".into(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn persisted_session_restores() {
        let store = MemoryStore::new();
        let session = Session::new("tok-123", admin());
        session.persist(&store);
        assert_eq!(Session::restore(&store), Some(session));
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        assert_eq!(Session::restore(&store), None);

        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"id": 1, "email": "a@b.c"}"#);
        assert_eq!(Session::restore(&store), None);
    }

    #[test]
    fn corrupt_user_is_cleared() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");
        assert_eq!(Session::restore(&store), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemoryStore::new();
        Session::new("tok", admin()).persist(&store);
        assert_eq!(store.len(), 2);
        Session::clear(&store);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }
}
