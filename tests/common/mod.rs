//! Shared fakes for the auth integration tests.

use std::sync::{Arc, Mutex};

use corequarry::auth::{AuthError, MemoryTokenStore, Navigator, Route, TokenStore};

/// Shared ordered log of observable side effects.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Navigator that records every replace into the shared log.
pub struct RecordingNavigator {
    log: EventLog,
    pub replaced: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            replaced: Vec::new(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, route: Route) {
        self.log.lock().unwrap().push(format!("replace:{route:?}"));
        self.replaced.push(route);
    }
}

/// Token store that records writes into the shared log.
#[derive(Clone)]
pub struct RecordingStore {
    log: EventLog,
    inner: MemoryTokenStore,
}

impl RecordingStore {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            inner: MemoryTokenStore::new(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.load().unwrap()
    }
}

impl TokenStore for RecordingStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        self.inner.load()
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        self.log.lock().unwrap().push("save".to_string());
        self.inner.save(token)
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.log.lock().unwrap().push("clear".to_string());
        self.inner.clear()
    }
}

/// Store whose writes always fail.
pub struct ReadOnlyStore;

impl TokenStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        Ok(None)
    }

    fn save(&self, _token: &str) -> Result<(), AuthError> {
        Err(AuthError::storage("session file is not writable"))
    }

    fn clear(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
