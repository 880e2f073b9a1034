//! Navigation capability consumed by the session gate and auth flow.
//!
//! The core never touches the UI's routing directly; it is handed a
//! `Navigator` and asks for history-discarding transitions. Every
//! authentication decision is a *replace*, never a push, so back
//! navigation can never return to a screen the decision invalidated.

/// Named destinations the auth subsystem can transition to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login form (unauthenticated area)
    Login,
    /// Registration form (unauthenticated area)
    Register,
    /// Tab shell (authenticated area)
    Tabs,
}

/// Something that can swap the current destination.
pub trait Navigator {
    /// Replace the current destination, discarding the history entry.
    fn replace(&mut self, route: Route);
}
