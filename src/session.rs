//! Persistent session token storage.
//!
//! The bearer token lives in a single file under the jobdeck data
//! directory, surviving process restarts the way browser storage survives
//! page reloads. No encryption, no expiry tracking — presence of the token
//! is the only authentication signal checked anywhere.

use std::path::{Path, PathBuf};

use crate::errors::SessionError;

/// File name of the token cell inside the data directory.
pub const SESSION_FILE: &str = "session";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the token, creating the data directory if needed.
    pub fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SessionError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, token).map_err(|source| SessionError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the token. A missing file or blank content is `None`.
    pub fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Remove the token file. Clearing an already-empty store is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::ClearFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Presence of a token is the only signal checked.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_on_empty_store_is_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-123".to_string()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_save_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep/nested");
        let store = SessionStore::new(&nested);
        store.save("tok-123").unwrap();
        assert!(nested.join(SESSION_FILE).exists());
    }

    #[test]
    fn test_load_trims_trailing_newline() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), "tok-123\n").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-123".to_string()));
    }

    #[test]
    fn test_blank_file_counts_as_logged_out() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.path(), "   \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save("tok-123").unwrap();
        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.clear().unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save("old-token").unwrap();
        store.save("new-token").unwrap();
        assert_eq!(store.load().unwrap(), Some("new-token".to_string()));
    }
}
