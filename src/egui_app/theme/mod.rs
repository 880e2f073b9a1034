//! Theme Module
//!
//! Color scheme for the CoreQuarry owner client.

pub mod colors;
