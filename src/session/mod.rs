//! Credential session state: the in-memory token cell and its persisted slot.
//!
//! The credential token is an opaque string issued by the backend at login.
//! Two cooperating types manage it:
//!
//! - [`SessionStore`]: a clone-cheap shared cell holding the current token.
//!   Read by the remote client before every outgoing request and by the
//!   session guard before rendering the protected listing screen. Written
//!   once at login, cleared at logout. No local validation is performed; an
//!   invalid-but-present token is only discovered when a request fails.
//! - [`TokenFile`]: the single named slot persisted on disk, so a session
//!   survives restarts. Written atomically (write-to-temp + rename) to
//!   prevent corruption on crashes.
//!
//! The store is the explicit session context that the remote client and the
//! guard receive by injection; nothing reads the token ambiently.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, RosterError};

/// Shared in-memory cell for the current credential token.
///
/// Cloning the store clones the handle, not the token; every clone observes
/// the same slot. Access is guarded by a lock only because request tasks read
/// the cell while the event loop may write it; there is never more than one
/// writer.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Creates a store with an optional initial token (typically loaded from
    /// the persisted slot at startup).
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns a copy of the current token, if one is set.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Reports whether a token is currently present.
    ///
    /// This is the whole of the session guard's check: presence, not
    /// validity.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .ok()
            .is_some_and(|guard| guard.is_some())
    }

    /// Sets the current token. Called once after a successful login.
    pub fn set(&self, token: String) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    /// Clears the current token. Called at logout.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// On-disk format of the credential slot.
///
/// A versioned wrapper rather than a bare string, for future migrations.
#[derive(Debug, Serialize, Deserialize)]
struct TokenSlot {
    version: u32,
    token: String,
}

/// The persisted credential slot file.
///
/// Holds at most one token. Absent file means absent session.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Creates a handle for the slot at the given path. The file itself is
    /// only touched by [`load`](Self::load), [`store`](Self::store), and
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted token, if the slot exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            tracing::debug!(path = ?self.path, "no persisted session");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let slot: TokenSlot = serde_json::from_str(&contents)
            .map_err(|e| RosterError::Session(format!("failed to parse token slot: {e}")))?;

        tracing::debug!(path = ?self.path, "loaded persisted session");
        Ok(Some(slot.token))
    }

    /// Persists a token, replacing any previous slot contents.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path, so the slot is never left in a corrupt state.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// write fails.
    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let slot = TokenSlot {
            version: 1,
            token: token.to_string(),
        };
        let json = serde_json::to_string_pretty(&slot)
            .map_err(|e| RosterError::Session(format!("failed to serialize token slot: {e}")))?;

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(path = ?self.path, "session persisted");
        Ok(())
    }

    /// Removes the persisted slot, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::debug!(path = ?self.path, "persisted session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionStore, TokenFile};

    #[test]
    fn store_starts_empty_and_tracks_writes() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);

        store.set("QpwL5tke4Pnpja7X4".to_string());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("QpwL5tke4Pnpja7X4".to_string()));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let store = SessionStore::new(None);
        let handle = store.clone();

        store.set("abc".to_string());
        assert_eq!(handle.token(), Some("abc".to_string()));

        handle.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn token_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = TokenFile::new(dir.path().join("token.json"));

        assert_eq!(file.load().expect("load"), None);

        file.store("QpwL5tke4Pnpja7X4").expect("store");
        assert_eq!(
            file.load().expect("load"),
            Some("QpwL5tke4Pnpja7X4".to_string())
        );

        file.clear().expect("clear");
        assert_eq!(file.load().expect("load"), None);
        // Clearing an already-absent slot is not an error.
        file.clear().expect("clear twice");
    }

    #[test]
    fn malformed_slot_surfaces_as_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json").expect("write");

        let file = TokenFile::new(path);
        assert!(file.load().is_err());
    }
}
