//! Session state management
//!
//! The session store is the one piece of shared state in the client. It is an
//! explicit object injected into the HTTP client and every view controller,
//! rather than ambient storage mutated from inside response handlers. The
//! HTTP client invalidates it on any authorization failure; an application
//! hook registered here is the redirect-to-login analog.

use std::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::models::session::{Role, Session};
use crate::utils::errors::{EventDeskError, Result};
use super::storage::SessionFile;

type InvalidateHook = Box<dyn Fn() + Send + Sync>;

/// Shared session state backed by the persisted token/role pair
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    file: SessionFile,
    on_invalidate: Mutex<Option<InvalidateHook>>,
}

impl SessionStore {
    /// Open the store, restoring any persisted session
    pub async fn open(config: &SessionConfig) -> Result<Self> {
        let file = SessionFile::new(config);
        let current = file.load().await?;

        if current.is_some() {
            info!("Restored session from {}", file.path().display());
        }

        Ok(Self {
            current: RwLock::new(current),
            file,
            on_invalidate: Mutex::new(None),
        })
    }

    /// Register the hook fired on global invalidation. The application uses
    /// this to route back to the unauthenticated entry point.
    pub fn on_invalidate<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.on_invalidate.lock().unwrap() = Some(Box::new(hook));
    }

    /// Current session, if authenticated
    pub fn session(&self) -> Option<Session> {
        self.current.read().unwrap().clone()
    }

    /// Current bearer token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.current.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// Current role, if authenticated
    pub fn role(&self) -> Option<Role> {
        self.current.read().unwrap().as_ref().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    /// Session gate: views call this before touching the network
    pub fn require(&self) -> Result<Session> {
        self.session().ok_or(EventDeskError::NotAuthenticated)
    }

    /// Store a fresh session (login)
    pub async fn set(&self, session: Session) -> Result<()> {
        self.file.save(&session).await?;
        *self.current.write().unwrap() = Some(session);
        debug!("Session stored");
        Ok(())
    }

    /// Drop the session (logout)
    pub async fn clear(&self) -> Result<()> {
        *self.current.write().unwrap() = None;
        self.file.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// Global authorization-failure handler: clear the session and fire the
    /// registered hook. Never fails; a store that cannot remove its file must
    /// still end up unauthenticated in memory.
    pub async fn invalidate(&self) {
        *self.current.write().unwrap() = None;
        if let Err(e) = self.file.clear().await {
            warn!(error = %e, "Failed to remove session file during invalidation");
        }

        let hook = self.on_invalidate.lock().unwrap();
        if let Some(hook) = hook.as_ref() {
            hook();
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use assert_matches::assert_matches;

    fn test_config(dir: &tempfile::TempDir) -> SessionConfig {
        SessionConfig {
            file_path: dir
                .path()
                .join("session.toml")
                .to_string_lossy()
                .into_owned(),
        }
    }

    fn admin_session() -> Session {
        Session {
            token: "tok".to_string(),
            role: Role::Admin,
        }
    }

    #[tokio::test]
    async fn test_gate_rejects_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(&test_config(&dir)).await.unwrap();

        assert!(!store.is_authenticated());
        assert_matches!(store.require(), Err(EventDeskError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_set_then_reopen_restores_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let store = SessionStore::open(&config).await.unwrap();
        store.set(admin_session()).await.unwrap();
        assert_eq!(store.role(), Some(Role::Admin));

        let reopened = SessionStore::open(&config).await.unwrap();
        assert_eq!(reopened.token(), Some("tok".to_string()));
        assert_eq!(reopened.role(), Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_invalidate_clears_and_fires_hook() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let store = SessionStore::open(&config).await.unwrap();
        store.set(admin_session()).await.unwrap();

        let fired = Arc::new(AtomicBool::new(false));
        let observed = fired.clone();
        store.on_invalidate(move || observed.store(true, Ordering::SeqCst));

        store.invalidate().await;

        assert!(fired.load(Ordering::SeqCst));
        assert!(!store.is_authenticated());
        // Token and role are gone together
        let reopened = SessionStore::open(&config).await.unwrap();
        assert!(!reopened.is_authenticated());
    }
}
