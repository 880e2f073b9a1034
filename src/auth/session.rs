//! Session gate.
//!
//! A single top-level guard deciding whether the user sees the
//! authenticated area. Its resolved state is shared session state: the
//! login success path promotes it, logout invalidates it, and every
//! protected view reads it instead of re-checking the store itself.
//!
//! Failure semantics: a storage read failure is treated exactly like
//! "no token" (fail closed). An empty stored token counts as absent.

use crate::auth::navigate::{Navigator, Route};
use crate::auth::store::TokenStore;

/// Resolution state of the session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The store has not been consulted yet
    #[default]
    Unknown,
    /// A non-empty token is present
    Authenticated,
    /// No token, an empty token, or the store could not be read
    Unauthenticated,
}

/// Gate protecting the authenticated area.
#[derive(Debug, Default)]
pub struct SessionGate {
    status: SessionStatus,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status without consulting the store.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Consult the store and record the result.
    pub fn resolve(&mut self, store: &dyn TokenStore) -> SessionStatus {
        self.status = match store.load() {
            Ok(Some(token)) if !token.is_empty() => SessionStatus::Authenticated,
            Ok(_) => SessionStatus::Unauthenticated,
            Err(e) => {
                // fail closed
                tracing::warn!(error = %e, "token lookup failed; treating session as unauthenticated");
                SessionStatus::Unauthenticated
            }
        };
        self.status
    }

    /// Guard a protected view: resolve if still unknown, and redirect
    /// to the login screen (replace, not push) when unauthenticated.
    ///
    /// Callers render protected content only when this returns
    /// `Authenticated`; until then they show at most a transient shell.
    pub fn guard(&mut self, store: &dyn TokenStore, navigator: &mut dyn Navigator) -> SessionStatus {
        if self.status == SessionStatus::Unknown {
            self.resolve(store);
        }
        if self.status == SessionStatus::Unauthenticated {
            navigator.replace(Route::Login);
        }
        self.status
    }

    /// Mark the session authenticated. Called by the login success path
    /// after the token was persisted.
    pub fn establish(&mut self) {
        self.status = SessionStatus::Authenticated;
    }

    /// Forget the resolution, forcing the next guard to re-check the
    /// store. Called on logout.
    pub fn invalidate(&mut self) {
        self.status = SessionStatus::Unknown;
    }
}
