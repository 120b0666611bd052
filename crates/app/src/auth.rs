use client::{ApiClient, MemoryStore, Session, SessionStore, TOKEN_KEY, USER_KEY};
use dioxus::prelude::*;
use shared_types::AdminUser;

/// `localStorage`-backed [`SessionStore`].
///
/// Storage is only reachable through async `eval`, so reads are served from
/// a snapshot taken by [`BrowserStore::load`]. Writes update the snapshot
/// and are forwarded to `localStorage`.
#[derive(Debug, Default)]
pub struct BrowserStore {
    snapshot: MemoryStore,
}

impl BrowserStore {
    /// Read the session keys out of `localStorage`.
    pub async fn load() -> Self {
        let store = Self::default();
        let mut eval = document::eval(&format!(
            "dioxus.send([localStorage.getItem({TOKEN_KEY:?}), localStorage.getItem({USER_KEY:?})]);"
        ));
        match eval.recv::<(Option<String>, Option<String>)>().await {
            Ok((token, user)) => {
                if let Some(token) = token {
                    store.snapshot.set(TOKEN_KEY, &token);
                }
                if let Some(user) = user {
                    store.snapshot.set(USER_KEY, &user);
                }
            }
            Err(e) => tracing::warn!(error = ?e, "Could not read stored session"),
        }
        store
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.snapshot.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.snapshot.set(key, value);
        // serde_json quoting doubles as JS string escaping
        match serde_json::to_string(value) {
            Ok(literal) => {
                document::eval(&format!("localStorage.setItem({key:?}, {literal});"));
            }
            Err(e) => tracing::warn!(error = %e, key, "Could not store session value"),
        }
    }

    fn remove(&self, key: &str) {
        self.snapshot.remove(key);
        document::eval(&format!("localStorage.removeItem({key:?});"));
    }
}

/// Global authentication state.
///
/// `ready` flips once the stored session has been read, so the guard never
/// bounces a signed-in admin to the login screen during startup.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    pub ready: Signal<bool>,
    api: Signal<ApiClient>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            ready: Signal::new(false),
            api: Signal::new(ApiClient::from_config(&client::config().api)),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// API client carrying the current token.
    ///
    /// Reads without subscribing so fetch effects do not re-run on login
    /// or logout.
    pub fn client(&self) -> ApiClient {
        let token = self.session.peek().as_ref().map(|s| s.token.clone());
        self.api.peek().clone().with_token(token)
    }

    /// Store a fresh session and mark the admin as signed in.
    pub fn login(&mut self, session: Session) {
        session.persist(&BrowserStore::default());
        self.session.set(Some(session));
    }

    /// Forget the session, both in memory and in storage.
    pub fn logout(&mut self) {
        Session::clear(&BrowserStore::default());
        if self.session.peek().is_some() {
            tracing::info!("Admin signed out");
            self.session.set(None);
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Restores the persisted session once on startup. Render near the root.
#[component]
pub fn SessionLoader() -> Element {
    let mut auth = use_auth();

    use_future(move || async move {
        let store = BrowserStore::load().await;
        let restored = Session::restore(&store);
        if let Some(session) = &restored {
            tracing::info!(email = %session.user.email, "Restored admin session");
        }
        auth.session.set(restored);
        auth.ready.set(true);
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::UserRole;

    #[test]
    fn empty_snapshot_restores_nothing() {
        let store = BrowserStore::default();
        assert_eq!(Session::restore(&store), None);
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn snapshot_restores_session() {
        let store = BrowserStore::default();
        store.snapshot.set(TOKEN_KEY, "tok");
        store.snapshot.set(
            USER_KEY,
            r#"{"id": 7, "name": "Dewi", "email": "dewi@example.com", "role": "admin"}"#,
        );
        let session = Session::restore(&store).unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.user.role, UserRole::Admin);
    }
}
