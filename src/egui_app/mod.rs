//! egui Native Desktop App Module
//!
//! Desktop shell for the CoreQuarry owner client. The shell renders the
//! login/register forms and the authenticated tab area; all session and
//! authentication decisions live in [`crate::auth`] and are wired in
//! through `AppState`.
//!
//! - **`config`** - Configuration management (service base URL)
//! - **`state`** - Central app state, router and per-frame polling
//! - **`types`** - Shared view types (tabs)
//! - **`views`** - Screen rendering
//! - **`theme`** - Color scheme
//! - **`main`** - Application entry point (binary)

pub mod config;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::{Config, Environment};
pub use state::{AppState, Router};
pub use types::Tab;
