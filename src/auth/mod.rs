//! Session and authentication core.
//!
//! This module holds everything the UI needs to authenticate an owner
//! account against the remote CoreQuarry service and to gate the
//! authenticated area on a locally stored session token:
//!
//! - **`client`** - HTTP client for the login/register endpoints
//! - **`store`** - Token persistence behind the `TokenStore` trait
//! - **`session`** - Session gate deciding authenticated vs. not
//! - **`flow`** - Form submission state machine driving the above
//! - **`navigate`** - Navigation capability consumed by gate and flow
//! - **`error`** - Closed error taxonomy for the whole subsystem
//!
//! The UI layer (`crate::egui_app`) wires these together; nothing in
//! here depends on egui, so the flow and gate are testable with plain
//! fakes.

pub mod client;
pub mod error;
pub mod flow;
pub mod navigate;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use client::AccountClient;
pub use error::AuthError;
pub use flow::AuthFlow;
pub use navigate::{Navigator, Route};
pub use session::{SessionGate, SessionStatus};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
