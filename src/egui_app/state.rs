//! Central application state shared across egui views.

use crate::auth::{
    AccountClient, AuthFlow, Navigator, Route, SessionGate, SessionStatus, TokenStore,
};
use crate::auth::{FileTokenStore, MemoryTokenStore};
use crate::egui_app::config::Config;
use crate::egui_app::types::Tab;

/// Single-destination router backing the `Navigator` capability.
///
/// The desktop shell has no history stack; a replace simply swaps the
/// rendered view, which matches the "discard history" semantics the
/// auth subsystem requires.
#[derive(Debug)]
pub struct Router {
    pub current: Route,
}

impl Navigator for Router {
    fn replace(&mut self, route: Route) {
        self.current = route;
    }
}

/// Everything the views need, wired together at startup.
pub struct AppState {
    pub config: Config,
    pub client: AccountClient,
    pub store: Box<dyn TokenStore>,
    pub router: Router,
    pub gate: SessionGate,
    pub flow: AuthFlow,
    pub active_tab: Tab,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let client = AccountClient::new(config.base_url());
        let store: Box<dyn TokenStore> = match FileTokenStore::default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "no persistent token store; session will not survive restarts");
                Box::new(MemoryTokenStore::new())
            }
        };

        let mut router = Router {
            current: Route::Login,
        };
        let mut gate = SessionGate::new();
        // One top-level session check at startup decides the initial area.
        if gate.resolve(store.as_ref()) == SessionStatus::Authenticated {
            router.replace(Route::Tabs);
        }

        Self {
            config,
            client,
            store,
            router,
            gate,
            flow: AuthFlow::new(),
            active_tab: Tab::default(),
        }
    }

    /// Per-frame work: consume the pending auth result, if any.
    pub fn tick(&mut self) {
        self.flow
            .poll(self.store.as_ref(), &mut self.gate, &mut self.router);
    }

    /// Switch to the registration form, abandoning any pending submit.
    pub fn open_register(&mut self) {
        self.flow.cancel();
        self.flow.error = None;
        self.flow.notice = None;
        self.router.replace(Route::Register);
    }

    /// Switch to the login form, abandoning any pending submit.
    pub fn open_login(&mut self) {
        self.flow.cancel();
        self.flow.error = None;
        self.router.replace(Route::Login);
    }

    /// Clear the stored token and return to the login screen.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear stored token on logout");
        }
        self.gate.invalidate();
        self.flow.reset();
        self.active_tab = Tab::default();
        self.router.replace(Route::Login);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
