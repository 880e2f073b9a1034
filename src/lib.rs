//! CoreQuarry Owner Client
//!
//! Native desktop client for the CoreQuarry owner account service.
//! The crate splits into two layers:
//!
//! - [`auth`] - session/authentication core: HTTP account client,
//!   token store, session gate and the submit flow. UI-free and
//!   testable with plain fakes.
//! - [`egui_app`] - the egui/eframe desktop shell consuming the core.

pub mod auth;
pub mod egui_app;
