//! Auth flow controller.
//!
//! Translates form state into exactly one in-flight service call per
//! submission. The UI thread stays free: each submit spawns a worker
//! thread with its own Tokio runtime and the result comes back over a
//! channel polled once per frame.
//!
//! Ordering requirement: on login success the token is persisted
//! *before* the navigation transition. A token must never be observable
//! as present unless the service actually confirmed the credentials,
//! and the authenticated area must never be entered unless the token
//! made it to the store.

use std::sync::mpsc::{channel, Receiver, TryRecvError};

use tokio::runtime::Runtime;

use crate::auth::client::AccountClient;
use crate::auth::error::AuthError;
use crate::auth::navigate::{Navigator, Route};
use crate::auth::session::SessionGate;
use crate::auth::store::TokenStore;

/// Confirmation shown on the login screen after a successful registration.
pub const REGISTERED_NOTICE: &str = "Account created. Please log in.";

/// Form fields shared by the login and register screens.
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy)]
enum SubmitKind {
    Login,
    Register,
}

#[derive(Debug)]
enum SubmitOutcome {
    LoggedIn(String),
    Registered,
}

/// Form state plus the single pending request, if any.
#[derive(Debug, Default)]
pub struct AuthFlow {
    pub fields: FormFields,
    pub loading: bool,
    pub error: Option<String>,
    /// Non-error confirmation, e.g. after registration
    pub notice: Option<String>,
    pending: Option<Receiver<Result<SubmitOutcome, AuthError>>>,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is in flight and its result not yet consumed.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the login form. A no-op while a request is in flight.
    ///
    /// Empty email or password fails synchronously without touching the
    /// network.
    pub fn submit_login(&mut self, client: &AccountClient) {
        if self.loading {
            return;
        }
        if self.fields.email.is_empty() || self.fields.password.is_empty() {
            self.error =
                Some(AuthError::validation("Email and password are required").user_message());
            return;
        }
        self.begin(client.clone(), SubmitKind::Login);
    }

    /// Submit the registration form. Same discipline over three fields.
    pub fn submit_register(&mut self, client: &AccountClient) {
        if self.loading {
            return;
        }
        if self.fields.name.is_empty()
            || self.fields.email.is_empty()
            || self.fields.password.is_empty()
        {
            self.error =
                Some(AuthError::validation("Name, email and password are required").user_message());
            return;
        }
        self.begin(client.clone(), SubmitKind::Register);
    }

    fn begin(&mut self, client: AccountClient, kind: SubmitKind) {
        self.loading = true;
        self.error = None;
        self.notice = None;

        let fields = self.fields.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match Runtime::new() {
                Ok(rt) => match kind {
                    SubmitKind::Login => rt
                        .block_on(client.login(&fields.email, &fields.password))
                        .map(SubmitOutcome::LoggedIn),
                    SubmitKind::Register => rt
                        .block_on(client.register(&fields.name, &fields.email, &fields.password))
                        .map(|()| SubmitOutcome::Registered),
                },
                Err(e) => Err(AuthError::network(format!("failed to start runtime: {e}"))),
            };
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
    }

    /// Poll the pending request; called once per frame.
    ///
    /// On login success the token is saved first; only a successful
    /// save establishes the session and triggers the navigation
    /// replace. A failed save surfaces a storage error and the user
    /// stays on the login screen. `loading` drops back to `false` as
    /// soon as any result arrives, whatever happens afterwards.
    pub fn poll(
        &mut self,
        store: &dyn TokenStore,
        gate: &mut SessionGate,
        navigator: &mut dyn Navigator,
    ) {
        let Some(rx) = &self.pending else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(AuthError::network("request worker disappeared"))
            }
        };

        self.pending = None;
        self.loading = false;

        match result {
            Ok(SubmitOutcome::LoggedIn(token)) => match store.save(&token) {
                Ok(()) => {
                    gate.establish();
                    self.fields.password.clear();
                    navigator.replace(Route::Tabs);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "token could not be persisted; staying on login");
                    self.error = Some(e.user_message());
                }
            },
            Ok(SubmitOutcome::Registered) => {
                self.fields.password.clear();
                self.notice = Some(REGISTERED_NOTICE.to_string());
                navigator.replace(Route::Login);
            }
            Err(e) => {
                self.error = Some(e.user_message());
            }
        }
    }

    /// Abandon the pending request, if any. Dropping the receiver means
    /// a late result can no longer mutate state.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.loading = false;
    }

    /// Clear all form and request state. Called on logout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
