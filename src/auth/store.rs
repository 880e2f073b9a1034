//! Session token storage.
//!
//! The token is a single opaque string owned by the store once
//! persisted. `FileTokenStore` keeps it in `session.json` under the
//! user's config directory with restricted permissions (0600); the
//! token value itself is never logged.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Session file name under the application config directory.
const SESSION_FILE: &str = "session.json";

/// Directory under the platform config dir holding application state.
const APP_DIR: &str = "corequarry";

/// Persistence contract for the session token.
///
/// `save` must make the token retrievable across process restarts.
/// `load` returns `Ok(None)` when no token was ever set or it was
/// cleared. All three operations may fail with `AuthError::Storage`.
pub trait TokenStore {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<String>, AuthError>;

    /// Persist the token, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), AuthError>;

    /// Remove the stored token.
    fn clear(&self) -> Result<(), AuthError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the platform default location
    /// (`<config dir>/corequarry/session.json`).
    ///
    /// # Errors
    /// Returns `Storage` if the platform config directory is unknown.
    pub fn default_location() -> Result<Self, AuthError> {
        let base = dirs::config_dir()
            .ok_or_else(|| AuthError::storage("no config directory on this platform"))?;
        Ok(Self::new(base.join(APP_DIR).join(SESSION_FILE)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_file(&self) -> Result<SessionFile, AuthError> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::storage(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            AuthError::storage(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    fn write_file(&self, file: &SessionFile) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let contents = serde_json::to_string_pretty(file)
            .map_err(|e| AuthError::storage(format!("failed to serialize session: {e}")))?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut out = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .map_err(|e| {
                    AuthError::storage(format!("failed to open {}: {e}", self.path.display()))
                })?;
            out.write_all(contents.as_bytes()).map_err(|e| {
                AuthError::storage(format!("failed to write {}: {e}", self.path.display()))
            })?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents).map_err(|e| {
                AuthError::storage(format!("failed to write {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        Ok(self.read_file()?.token)
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        self.write_file(&SessionFile {
            token: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<(), AuthError> {
        if !self.path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| {
            AuthError::storage(format!("failed to remove {}: {e}", self.path.display()))
        })
    }
}

/// In-memory token store for tests and as a fallback when no config
/// directory is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Option<String>>, AuthError> {
        self.token
            .lock()
            .map_err(|_| AuthError::storage("token store mutex poisoned"))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        *self.guard()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.guard()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_load_when_never_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save("abc123").unwrap();

        // a fresh instance sees the persisted token
        let reopened = store_in(&dir);
        assert_eq!(reopened.load().unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_save_overwrites_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("abc123").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear_when_never_saved_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupted_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json }").unwrap();

        let store = FileTokenStore::new(path);
        assert_matches!(store.load(), Err(AuthError::Storage { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("abc123").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();
        store.save("abc123").unwrap();
        assert_eq!(clone.load().unwrap().as_deref(), Some("abc123"));
    }
}
