//! Authentication Error Types
//!
//! A closed taxonomy for everything that can go wrong between the form
//! and the remote account service. Every failure the UI can see is one
//! of these variants; nothing else propagates past the auth flow.
//!
//! # Error Categories
//!
//! - `Validation` - a required field is missing; detected locally
//! - `Network` - the request never reached the service
//! - `RemoteRejected` - the service answered with a non-2xx status
//! - `Protocol` - the service answered 2xx but broke its contract
//! - `Storage` - the local token store failed to read or write
//!
//! All variants are `Clone` so results can cross the channel between
//! the request worker and the UI thread.

use thiserror::Error;

/// Fallback shown when the service rejects a request without a message.
pub const GENERIC_REMOTE_MESSAGE: &str = "The server reported an error. Please try again.";

/// Shown for any failure to reach the service at all.
pub const GENERIC_NETWORK_MESSAGE: &str =
    "Could not reach the server. Check your connection and try again.";

/// Shown when the service answered but the response was malformed.
pub const GENERIC_PROTOCOL_MESSAGE: &str = "The server returned an unexpected response.";

/// Errors produced by the authentication subsystem
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required field is empty; no request was sent
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// The request could not reach the remote service
    #[error("network error: {message}")]
    Network {
        /// Transport-level detail, not shown to the user
        message: String,
    },

    /// The remote service returned a non-2xx status
    #[error("request rejected: {message}")]
    RemoteRejected {
        /// Message from the response body, or the generic fallback
        message: String,
    },

    /// The remote service returned 2xx but violated its contract
    #[error("protocol violation: {message}")]
    Protocol {
        /// What was wrong with the response
        message: String,
    },

    /// The local token store failed to read or write
    #[error("storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new remote-rejection error
    pub fn remote_rejected(message: impl Into<String>) -> Self {
        Self::RemoteRejected {
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// The single user-facing message for this error.
    ///
    /// Validation, rejection and storage messages are surfaced verbatim;
    /// transport and contract failures collapse to fixed generic strings
    /// so raw error chains never reach the screen.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::RemoteRejected { message }
            | Self::Storage { message } => message.clone(),
            Self::Network { .. } => GENERIC_NETWORK_MESSAGE.to_string(),
            Self::Protocol { .. } => GENERIC_PROTOCOL_MESSAGE.to_string(),
        }
    }
}
