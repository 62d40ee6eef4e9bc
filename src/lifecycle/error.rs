//! Error types for lifecycle parsing.
//!
//! The state machine itself has no runtime failures: its API takes the
//! [`super::LifecycleState`] enum, so an invalid state is unrepresentable.
//! Errors exist only at the string edge, where route parameters or stored
//! tokens are parsed.

use thiserror::Error;

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Errors for lifecycle token parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LifecycleError {
    /// A string token does not name any of the 21 lifecycle states.
    #[error("unknown lifecycle state: {token}")]
    UnknownState {
        /// The token that failed to parse
        token: String,
    },

    /// A string token does not name any of the 4 legacy statuses.
    #[error("unknown service status: {token}")]
    UnknownStatus {
        /// The token that failed to parse
        token: String,
    },
}

impl LifecycleError {
    /// Creates an unknown state error for a token.
    pub fn unknown_state(token: impl Into<String>) -> Self {
        Self::UnknownState {
            token: token.into(),
        }
    }

    /// Creates an unknown status error for a token.
    pub fn unknown_status(token: impl Into<String>) -> Self {
        Self::UnknownStatus {
            token: token.into(),
        }
    }
}
