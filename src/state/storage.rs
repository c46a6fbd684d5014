//! Session persistence
//!
//! The browser build of this client kept two strings in local storage:
//! `token` and `role`. Here they live in one small TOML file, written and
//! removed together, never independently.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::models::session::{Role, Session};
use crate::utils::errors::{EventDeskError, Result};

/// On-disk shape of the persisted session
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    role: String,
}

/// File-backed store for the persisted session pair
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a session file handle from configuration
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            path: PathBuf::from(&config.file_path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file means no session. A file that no longer parses, or that
    /// carries an unknown role, is removed rather than surfaced: a stale pair
    /// must never keep the client half-authenticated.
    pub async fn load(&self) -> Result<Option<Session>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let persisted: PersistedSession = match toml::from_str(&raw) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Removing unreadable session file");
                self.clear().await?;
                return Ok(None);
            }
        };

        match Role::parse(&persisted.role) {
            Some(role) => {
                debug!(path = %self.path.display(), role = %role, "Restored persisted session");
                Ok(Some(Session {
                    token: persisted.token,
                    role,
                }))
            }
            None => {
                warn!(path = %self.path.display(), role = %persisted.role, "Removing session file with unknown role");
                self.clear().await?;
                Ok(None)
            }
        }
    }

    /// Persist the session pair
    pub async fn save(&self, session: &Session) -> Result<()> {
        let persisted = PersistedSession {
            token: session.token.clone(),
            role: session.role.as_str().to_string(),
        };

        let serialized = toml::to_string(&persisted).map_err(|e| {
            EventDeskError::SessionFile(format!("Failed to serialize session: {}", e))
        })?;

        tokio::fs::write(&self.path, serialized).await?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Remove the persisted pair; both values go together
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
